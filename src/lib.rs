//! Mock backend for the Agape-Care administration UI.

pub mod model;
pub mod server;
