use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct SessionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SessionRepository<'a, C> {
    /// Creates a new instance of [`SessionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get the sessions of a program ordered by start time
    pub async fn get_by_program_id(
        &self,
        program_id: i32,
    ) -> Result<Vec<entity::session::Model>, DbErr> {
        entity::prelude::Session::find()
            .filter(entity::session::Column::ProgramId.eq(program_id))
            .order_by_asc(entity::session::Column::StartsAt)
            .order_by_asc(entity::session::Column::Id)
            .all(self.db)
            .await
    }
}
