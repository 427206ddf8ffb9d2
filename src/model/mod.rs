//! Request and response bodies of the mock API.
//!
//! Field names are camelCase on the wire to match what the UI sends and expects.

pub mod ai_interaction;
pub mod api;
pub mod program;
pub mod reservation;
pub mod seed;
pub mod storage;
pub mod user;
pub mod venue;
