//! SeaORM entities backing the Agape-Care mock store.
//!
//! Foreign keys between entities are plain integer columns; no relations are declared so the
//! store never enforces referential integrity.

pub mod prelude;

pub mod ai_interaction;
pub mod auth_provider;
pub mod benefit;
pub mod client_storage;
pub mod device;
pub mod device_rental;
pub mod equipment;
pub mod json;
pub mod membership;
pub mod message;
pub mod notification;
pub mod program;
pub mod program_participant;
pub mod reservation;
pub mod review;
pub mod room;
pub mod room_reservation;
pub mod session;
pub mod user;
pub mod user_activity;
pub mod venue;
