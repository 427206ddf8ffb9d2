//! Server application models.
//!
//! Holds the state shared by every request handler.

pub mod app;
