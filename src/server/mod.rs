//! Server application core modules.
//!
//! This module contains the mock backend for the Agape-Care admin UI: HTTP routing, the
//! request handlers, the in-memory store's repositories, the record factory that generates
//! fake records, and the seed run that fills the store at startup.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod factory;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
