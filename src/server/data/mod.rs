//! Data access layer repositories.
//!
//! Each repository wraps the queries the request handlers need for one entity. Record creation
//! for seeded entities goes through the record factory instead, so repositories mostly read,
//! filter, update and delete.

pub mod ai_interaction;
pub mod client_storage;
pub mod program;
pub mod room;
pub mod room_reservation;
pub mod session;
pub mod user;
pub mod venue;

pub use ai_interaction::AiInteractionRepository;
pub use client_storage::ClientStorageRepository;
pub use program::ProgramRepository;
pub use room::RoomRepository;
pub use room_reservation::RoomReservationRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
pub use venue::VenueRepository;
