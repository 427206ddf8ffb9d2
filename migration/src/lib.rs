pub use sea_orm_migration::prelude::*;

mod m20251101_000001_user;
mod m20251101_000002_auth_provider;
mod m20251101_000003_venue;
mod m20251101_000004_room;
mod m20251101_000005_program;
mod m20251101_000006_session;
mod m20251101_000007_room_reservation;
mod m20251101_000008_ai_interaction;
mod m20251101_000009_program_participant;
mod m20251101_000010_device;
mod m20251101_000011_device_rental;
mod m20251101_000012_user_activity;
mod m20251101_000013_review;
mod m20251101_000014_notification;
mod m20251101_000015_benefit;
mod m20251101_000016_membership;
mod m20251101_000017_message;
mod m20251101_000018_equipment;
mod m20251101_000019_reservation;
mod m20251101_000020_client_storage;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_user::Migration),
            Box::new(m20251101_000002_auth_provider::Migration),
            Box::new(m20251101_000003_venue::Migration),
            Box::new(m20251101_000004_room::Migration),
            Box::new(m20251101_000005_program::Migration),
            Box::new(m20251101_000006_session::Migration),
            Box::new(m20251101_000007_room_reservation::Migration),
            Box::new(m20251101_000008_ai_interaction::Migration),
            Box::new(m20251101_000009_program_participant::Migration),
            Box::new(m20251101_000010_device::Migration),
            Box::new(m20251101_000011_device_rental::Migration),
            Box::new(m20251101_000012_user_activity::Migration),
            Box::new(m20251101_000013_review::Migration),
            Box::new(m20251101_000014_notification::Migration),
            Box::new(m20251101_000015_benefit::Migration),
            Box::new(m20251101_000016_membership::Migration),
            Box::new(m20251101_000017_message::Migration),
            Box::new(m20251101_000018_equipment::Migration),
            Box::new(m20251101_000019_reservation::Migration),
            Box::new(m20251101_000020_client_storage::Migration),
        ]
    }
}
