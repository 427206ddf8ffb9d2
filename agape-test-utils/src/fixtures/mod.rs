//! Test fixture modules for inserting records directly into the test store.
//!
//! Fixtures bypass the record factory and write fixed, predictable values so assertions can
//! compare against known data:
//!
//! - `user` - user accounts
//! - `venue` - venues and their rooms
//! - `program` - programs, sessions, reservations and AI interaction logs

pub mod program;
pub mod user;
pub mod venue;
