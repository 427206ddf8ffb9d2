pub use super::ai_interaction::Entity as AiInteraction;
pub use super::auth_provider::Entity as AuthProvider;
pub use super::benefit::Entity as Benefit;
pub use super::client_storage::Entity as ClientStorage;
pub use super::device::Entity as Device;
pub use super::device_rental::Entity as DeviceRental;
pub use super::equipment::Entity as Equipment;
pub use super::membership::Entity as Membership;
pub use super::message::Entity as Message;
pub use super::notification::Entity as Notification;
pub use super::program::Entity as Program;
pub use super::program_participant::Entity as ProgramParticipant;
pub use super::reservation::Entity as Reservation;
pub use super::review::Entity as Review;
pub use super::room::Entity as Room;
pub use super::room_reservation::Entity as RoomReservation;
pub use super::session::Entity as Session;
pub use super::user::Entity as User;
pub use super::user_activity::Entity as UserActivity;
pub use super::venue::Entity as Venue;
