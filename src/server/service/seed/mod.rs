//! Seed orchestration.
//!
//! A seed run clears every seeded table and recreates it through the record factory, parents
//! before children, so child records reference IDs that exist in the fresh store. The run is not
//! transactional: a failed insert aborts it and leaves the store partially seeded.

pub mod plan;


use entity::json::MembershipBenefits;
use rand::{rngs::StdRng, seq::IndexedRandom, Rng};
use sea_orm::{ActiveValue, ConnectionTrait, EntityName, EntityTrait};

use crate::{
    model::seed::SeedSummary,
    server::{
        error::Error,
        factory::Factory,
        service::seed::plan::SeedPlan,
        util::password::hash_password,
    },
};

/// Email of the administrator account every seed run creates first.
pub const DEMO_ADMIN_EMAIL: &str = "admin@agape-care.test";
/// Password of [`DEMO_ADMIN_EMAIL`].
pub const DEMO_ADMIN_PASSWORD: &str = "agape1234";

pub struct SeedService<'a, C: ConnectionTrait> {
    db: &'a C,
    plan: SeedPlan,
    rng_seed: Option<u64>,
}

impl<'a, C: ConnectionTrait> SeedService<'a, C> {
    /// Creates a seed service using the default [`SeedPlan`] and random values
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            plan: SeedPlan::default(),
            rng_seed: None,
        }
    }

    pub fn with_plan(mut self, plan: SeedPlan) -> Self {
        self.plan = plan;
        self
    }

    /// Draw generated values from a deterministic stream seeded with `rng_seed`
    pub fn with_rng_seed(mut self, rng_seed: Option<u64>) -> Self {
        self.rng_seed = rng_seed;
        self
    }

    /// Clear the store and repopulate it according to the plan.
    ///
    /// # Returns
    /// - `Ok(SeedSummary)` - Number of records created per entity
    /// - `Err(Error::DbErr)` - An insert failed, records created before it are kept
    pub async fn seed_database(&self) -> Result<SeedSummary, Error> {
        self.clear_all().await;

        let plan = &self.plan;
        let mut factory = match self.rng_seed {
            Some(seed) => Factory::with_seed(self.db, seed),
            None => Factory::new(self.db),
        };

        let users = factory
            .create_many(plan.users, |_, index| user_overrides(index))
            .await?;
        let user_ids: Vec<i32> = users.iter().map(|user| user.id).collect();

        let auth_providers = factory
            .create_many(plan.auth_providers, |rng, _| {
                entity::auth_provider::ActiveModel {
                    user_id: parent(rng, &user_ids),
                    ..Default::default()
                }
            })
            .await?;

        let venues = factory
            .create_many(plan.venues, |_, _| entity::venue::ActiveModel::default())
            .await?;
        let venue_ids: Vec<i32> = venues.iter().map(|venue| venue.id).collect();

        let rooms = factory
            .create_many(plan.rooms, |rng, _| entity::room::ActiveModel {
                venue_id: parent(rng, &venue_ids),
                ..Default::default()
            })
            .await?;
        let room_ids: Vec<i32> = rooms.iter().map(|room| room.id).collect();

        let programs = factory
            .create_many(plan.programs, |rng, _| entity::program::ActiveModel {
                instructor_id: optional_parent(rng, &user_ids, 0.8),
                ..Default::default()
            })
            .await?;
        let program_ids: Vec<i32> = programs.iter().map(|program| program.id).collect();

        let sessions = factory
            .create_many(plan.sessions, |rng, _| entity::session::ActiveModel {
                program_id: parent(rng, &program_ids),
                room_id: optional_parent(rng, &room_ids, 0.9),
                ..Default::default()
            })
            .await?;

        let room_reservations = factory
            .create_many(plan.room_reservations, |rng, _| {
                room_reservation_overrides(rng, &sessions, &room_ids, &user_ids)
            })
            .await?;

        let ai_interactions = factory
            .create_many(plan.ai_interactions, |rng, _| {
                entity::ai_interaction::ActiveModel {
                    user_id: parent(rng, &user_ids),
                    ..Default::default()
                }
            })
            .await?;

        let program_participants = factory
            .create_many(plan.program_participants, |rng, _| {
                entity::program_participant::ActiveModel {
                    program_id: parent(rng, &program_ids),
                    user_id: parent(rng, &user_ids),
                    ..Default::default()
                }
            })
            .await?;

        let devices = factory
            .create_many(plan.devices, |_, index| entity::device::ActiveModel {
                serial_number: ActiveValue::Set(format!("DEV-{:06}", index + 1)),
                ..Default::default()
            })
            .await?;
        let device_ids: Vec<i32> = devices.iter().map(|device| device.id).collect();

        let device_rentals = factory
            .create_many(plan.device_rentals, |rng, _| {
                entity::device_rental::ActiveModel {
                    device_id: parent(rng, &device_ids),
                    user_id: parent(rng, &user_ids),
                    ..Default::default()
                }
            })
            .await?;

        let user_activities = factory
            .create_many(plan.user_activities, |rng, _| {
                entity::user_activity::ActiveModel {
                    user_id: parent(rng, &user_ids),
                    ..Default::default()
                }
            })
            .await?;

        let reviews = factory
            .create_many(plan.reviews, |rng, _| entity::review::ActiveModel {
                program_id: parent(rng, &program_ids),
                user_id: parent(rng, &user_ids),
                ..Default::default()
            })
            .await?;

        let notifications = factory
            .create_many(plan.notifications, |rng, _| {
                entity::notification::ActiveModel {
                    user_id: parent(rng, &user_ids),
                    ..Default::default()
                }
            })
            .await?;

        let benefits = factory
            .create_many(plan.benefits, |_, _| entity::benefit::ActiveModel::default())
            .await?;
        let benefit_ids: Vec<i32> = benefits.iter().map(|benefit| benefit.id).collect();

        let memberships = factory
            .create_many(plan.memberships, |rng, index| {
                entity::membership::ActiveModel {
                    // One membership per user until every user has one
                    user_id: match user_ids.get(index % user_ids.len().max(1)) {
                        Some(user_id) => ActiveValue::Set(*user_id),
                        None => ActiveValue::NotSet,
                    },
                    benefits: membership_benefits(rng, &benefit_ids),
                    ..Default::default()
                }
            })
            .await?;

        let messages = factory
            .create_many(plan.messages, |rng, _| entity::message::ActiveModel {
                sender_id: parent(rng, &user_ids),
                recipient_id: parent(rng, &user_ids),
                ..Default::default()
            })
            .await?;

        let equipment = factory
            .create_many(plan.equipment, |rng, _| entity::equipment::ActiveModel {
                venue_id: optional_parent(rng, &venue_ids, 0.8),
                ..Default::default()
            })
            .await?;
        let equipment_ids: Vec<i32> = equipment.iter().map(|item| item.id).collect();

        let reservations = factory
            .create_many(plan.reservations, |rng, _| {
                entity::reservation::ActiveModel {
                    equipment_id: parent(rng, &equipment_ids),
                    user_id: parent(rng, &user_ids),
                    ..Default::default()
                }
            })
            .await?;

        let summary = SeedSummary {
            users: users.len() as u64,
            auth_providers: auth_providers.len() as u64,
            venues: venues.len() as u64,
            rooms: rooms.len() as u64,
            programs: programs.len() as u64,
            sessions: sessions.len() as u64,
            room_reservations: room_reservations.len() as u64,
            ai_interactions: ai_interactions.len() as u64,
            program_participants: program_participants.len() as u64,
            devices: devices.len() as u64,
            device_rentals: device_rentals.len() as u64,
            user_activities: user_activities.len() as u64,
            reviews: reviews.len() as u64,
            notifications: notifications.len() as u64,
            benefits: benefits.len() as u64,
            memberships: memberships.len() as u64,
            messages: messages.len() as u64,
            equipment: equipment.len() as u64,
            reservations: reservations.len() as u64,
        };

        tracing::info!(
            "Seeded mock store with {} users, {} programs and {} sessions",
            summary.users,
            summary.programs,
            summary.sessions
        );

        Ok(summary)
    }

    /// Bulk delete every seeded table, children first.
    async fn clear_all(&self) {
        self.clear(entity::prelude::Reservation).await;
        self.clear(entity::prelude::Equipment).await;
        self.clear(entity::prelude::Message).await;
        self.clear(entity::prelude::Membership).await;
        self.clear(entity::prelude::Benefit).await;
        self.clear(entity::prelude::Notification).await;
        self.clear(entity::prelude::Review).await;
        self.clear(entity::prelude::UserActivity).await;
        self.clear(entity::prelude::DeviceRental).await;
        self.clear(entity::prelude::Device).await;
        self.clear(entity::prelude::ProgramParticipant).await;
        self.clear(entity::prelude::AiInteraction).await;
        self.clear(entity::prelude::RoomReservation).await;
        self.clear(entity::prelude::Session).await;
        self.clear(entity::prelude::Program).await;
        self.clear(entity::prelude::Room).await;
        self.clear(entity::prelude::Venue).await;
        self.clear(entity::prelude::AuthProvider).await;
        self.clear(entity::prelude::User).await;
    }

    /// Failures are logged and skipped.
    async fn clear<E: EntityTrait>(&self, entity: E) {
        if let Err(err) = E::delete_many().exec(self.db).await {
            tracing::warn!(
                "Failed to clear table {} before seeding: {}",
                entity.table_name(),
                err
            );
        }
    }
}

fn user_overrides(index: usize) -> entity::user::ActiveModel {
    if index == 0 {
        return entity::user::ActiveModel {
            email: ActiveValue::Set(DEMO_ADMIN_EMAIL.to_string()),
            name: ActiveValue::Set("관리자".to_string()),
            password_hash: ActiveValue::Set(hash_password(DEMO_ADMIN_PASSWORD)),
            role: ActiveValue::Set("admin".to_string()),
            ..Default::default()
        };
    }

    entity::user::ActiveModel {
        email: ActiveValue::Set(format!("user{}@agape-care.test", index)),
        ..Default::default()
    }
}

/// A random ID among the created parents, or the generated value if none were created.
fn parent(rng: &mut StdRng, ids: &[i32]) -> ActiveValue<i32> {
    match ids.choose(rng) {
        Some(id) => ActiveValue::Set(*id),
        None => ActiveValue::NotSet,
    }
}

/// Like [`parent`] for nullable references, null with probability `1 - probability`.
fn optional_parent(rng: &mut StdRng, ids: &[i32], probability: f64) -> ActiveValue<Option<i32>> {
    if ids.is_empty() {
        return ActiveValue::NotSet;
    }

    if rng.random_bool(probability) {
        ActiveValue::Set(ids.choose(rng).copied())
    } else {
        ActiveValue::Set(None)
    }
}

/// Half of the reservations book a session's room and time slot, the rest book a free slot.
fn room_reservation_overrides(
    rng: &mut StdRng,
    sessions: &[entity::session::Model],
    room_ids: &[i32],
    user_ids: &[i32],
) -> entity::room_reservation::ActiveModel {
    let user_id = parent(rng, user_ids);

    let session = if rng.random_bool(0.5) {
        sessions.choose(rng)
    } else {
        None
    };

    match session {
        Some(session) => entity::room_reservation::ActiveModel {
            room_id: match session.room_id {
                Some(room_id) => ActiveValue::Set(room_id),
                None => parent(rng, room_ids),
            },
            user_id,
            session_id: ActiveValue::Set(Some(session.id)),
            starts_at: ActiveValue::Set(session.starts_at),
            ends_at: ActiveValue::Set(session.ends_at),
            ..Default::default()
        },
        None => entity::room_reservation::ActiveModel {
            room_id: parent(rng, room_ids),
            user_id,
            session_id: if sessions.is_empty() {
                ActiveValue::NotSet
            } else {
                ActiveValue::Set(None)
            },
            ..Default::default()
        },
    }
}

fn membership_benefits(rng: &mut StdRng, benefit_ids: &[i32]) -> ActiveValue<MembershipBenefits> {
    if benefit_ids.is_empty() {
        return ActiveValue::NotSet;
    }

    let count = rng.random_range(1..=3).min(benefit_ids.len());
    let mut benefits: Vec<i32> = benefit_ids.choose_multiple(rng, count).copied().collect();
    benefits.sort_unstable();

    ActiveValue::Set(MembershipBenefits(benefits))
}
