use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter, QueryOrder,
};

pub struct RoomReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomReservationRepository<'a, C> {
    /// Creates a new instance of [`RoomReservationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get reservations ordered by ID, optionally only those made by `user_id`
    pub async fn get_all(
        &self,
        user_id: Option<i32>,
    ) -> Result<Vec<entity::room_reservation::Model>, DbErr> {
        let mut query = entity::prelude::RoomReservation::find();
        if let Some(user_id) = user_id {
            query = query.filter(entity::room_reservation::Column::UserId.eq(user_id));
        }

        query
            .order_by_asc(entity::room_reservation::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, reservation_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::RoomReservation::delete_by_id(reservation_id)
            .exec(self.db)
            .await
    }
}
