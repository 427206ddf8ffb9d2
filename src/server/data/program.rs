use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::factory::apply_overrides;

pub struct ProgramRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProgramRepository<'a, C> {
    /// Creates a new instance of [`ProgramRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get programs ordered by ID, optionally only those in `category`
    pub async fn get_all(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<entity::program::Model>, DbErr> {
        let mut query = entity::prelude::Program::find();
        if let Some(category) = category {
            query = query.filter(entity::program::Column::Category.eq(category));
        }

        query
            .order_by_asc(entity::program::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        program_id: i32,
    ) -> Result<Option<entity::program::Model>, DbErr> {
        entity::prelude::Program::find_by_id(program_id)
            .one(self.db)
            .await
    }

    /// Apply the set columns of `overrides` to an existing program
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The program after the update
    /// - `Ok(None)` - No program with the provided ID exists
    /// - `Err(DbErr)` - Query failed
    pub async fn update(
        &self,
        program_id: i32,
        overrides: entity::program::ActiveModel,
    ) -> Result<Option<entity::program::Model>, DbErr> {
        let Some(program) = self.get_by_id(program_id).await? else {
            return Ok(None);
        };

        let mut program = program.into_active_model();
        apply_overrides(&mut program, &overrides);
        // The primary key is never taken from the request
        program.id = sea_orm::ActiveValue::Unchanged(program_id);

        if !program.is_changed() {
            return self.get_by_id(program_id).await;
        }

        Ok(Some(program.update(self.db).await?))
    }

    /// Deletes a program
    ///
    /// Sessions, reviews and participants referencing the program are left in place.
    pub async fn delete(&self, program_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Program::delete_by_id(program_id)
            .exec(self.db)
            .await
    }
}
