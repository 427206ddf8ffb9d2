//! Service layer.
//!
//! Services hold the logic that spans more than one repository call: account registration and
//! login rules, and the seed run that rebuilds the whole mock store.

pub mod auth;
pub mod seed;
