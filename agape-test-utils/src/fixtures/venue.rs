use chrono::Utc;
use entity::json::VenueMeta;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn venue<'a>(&'a self) -> VenueFixtures<'a> {
        VenueFixtures { setup: self }
    }
}

pub struct VenueFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> VenueFixtures<'a> {
    pub async fn insert_venue(&self, name: &str) -> Result<entity::venue::Model, TestError> {
        Ok(
            entity::prelude::Venue::insert(entity::venue::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                address: ActiveValue::Set("서울특별시 마포구 월드컵로 1".to_string()),
                capacity: ActiveValue::Set(40),
                meta: ActiveValue::Set(VenueMeta {
                    amenities: vec!["엘리베이터".to_string()],
                    parking: true,
                    wheelchair_accessible: true,
                }),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a room referencing `venue_id`.
    ///
    /// The venue is not required to exist, the store does not enforce foreign keys.
    pub async fn insert_room(
        &self,
        venue_id: i32,
        name: &str,
    ) -> Result<entity::room::Model, TestError> {
        Ok(
            entity::prelude::Room::insert(entity::room::ActiveModel {
                venue_id: ActiveValue::Set(venue_id),
                name: ActiveValue::Set(name.to_string()),
                floor: ActiveValue::Set(1),
                capacity: ActiveValue::Set(12),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
