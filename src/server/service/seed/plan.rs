/// Number of records of each entity a seed run creates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedPlan {
    pub users: usize,
    pub auth_providers: usize,
    pub venues: usize,
    pub rooms: usize,
    pub programs: usize,
    pub sessions: usize,
    pub room_reservations: usize,
    pub ai_interactions: usize,
    pub program_participants: usize,
    pub devices: usize,
    pub device_rentals: usize,
    pub user_activities: usize,
    pub reviews: usize,
    pub notifications: usize,
    pub benefits: usize,
    pub memberships: usize,
    pub messages: usize,
    pub equipment: usize,
    pub reservations: usize,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self {
            users: 30,
            auth_providers: 36,
            venues: 5,
            rooms: 20,
            programs: 24,
            sessions: 72,
            room_reservations: 40,
            ai_interactions: 50,
            program_participants: 80,
            devices: 15,
            device_rentals: 20,
            user_activities: 90,
            reviews: 45,
            notifications: 60,
            benefits: 8,
            memberships: 25,
            messages: 50,
            equipment: 25,
            reservations: 30,
        }
    }
}

impl SeedPlan {
    /// A handful of records per entity, for tests.
    pub fn small() -> Self {
        Self {
            users: 4,
            auth_providers: 4,
            venues: 2,
            rooms: 3,
            programs: 3,
            sessions: 5,
            room_reservations: 4,
            ai_interactions: 3,
            program_participants: 4,
            devices: 2,
            device_rentals: 2,
            user_activities: 3,
            reviews: 3,
            notifications: 3,
            benefits: 2,
            memberships: 2,
            messages: 3,
            equipment: 2,
            reservations: 2,
        }
    }

    /// Plan that creates no records, a seed run with it only clears the store.
    pub fn empty() -> Self {
        Self {
            users: 0,
            auth_providers: 0,
            venues: 0,
            rooms: 0,
            programs: 0,
            sessions: 0,
            room_reservations: 0,
            ai_interactions: 0,
            program_participants: 0,
            devices: 0,
            device_rentals: 0,
            user_activities: 0,
            reviews: 0,
            notifications: 0,
            benefits: 0,
            memberships: 0,
            messages: 0,
            equipment: 0,
            reservations: 0,
        }
    }
}
