use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct AiInteractionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AiInteractionRepository<'a, C> {
    /// Creates a new instance of [`AiInteractionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get logged interactions, newest first, optionally only those of `user_id`
    pub async fn get_all(
        &self,
        user_id: Option<i32>,
    ) -> Result<Vec<entity::ai_interaction::Model>, DbErr> {
        let mut query = entity::prelude::AiInteraction::find();
        if let Some(user_id) = user_id {
            query = query.filter(entity::ai_interaction::Column::UserId.eq(user_id));
        }

        query
            .order_by_desc(entity::ai_interaction::Column::CreatedAt)
            .order_by_desc(entity::ai_interaction::Column::Id)
            .all(self.db)
            .await
    }
}
