//! HTTP controller endpoints for the Agape mock API.
//!
//! Handlers answer the admin UI's network calls from the mock store. Successful responses wrap
//! their data in a named envelope (`{ "programs": [...] }`) and failures render an `ErrorDto`.
//! Create routes accept partial bodies: present fields override the record factory's generated
//! values.

pub mod ai_interaction;
pub mod auth;
pub mod program;
pub mod reservation;
pub mod seed;
pub mod storage;
pub mod user;
pub mod util;
pub mod venue;
