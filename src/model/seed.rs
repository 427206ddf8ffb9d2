use serde::{Deserialize, Serialize};

/// Number of records of each entity written by a seed run
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeedSummary {
    pub users: u64,
    pub auth_providers: u64,
    pub venues: u64,
    pub rooms: u64,
    pub programs: u64,
    pub sessions: u64,
    pub room_reservations: u64,
    pub ai_interactions: u64,
    pub program_participants: u64,
    pub devices: u64,
    pub device_rentals: u64,
    pub user_activities: u64,
    pub reviews: u64,
    pub notifications: u64,
    pub benefits: u64,
    pub memberships: u64,
    pub messages: u64,
    pub equipment: u64,
    pub reservations: u64,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SeedResponseDto {
    pub seeded: SeedSummary,
}
