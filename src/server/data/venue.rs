use sea_orm::{ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder};

pub struct VenueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VenueRepository<'a, C> {
    /// Creates a new instance of [`VenueRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::venue::Model>, DbErr> {
        entity::prelude::Venue::find()
            .order_by_asc(entity::venue::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a venue, rooms inside it are left in place
    pub async fn delete(&self, venue_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Venue::delete_by_id(venue_id)
            .exec(self.db)
            .await
    }
}
