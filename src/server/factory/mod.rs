//! Record factory for the mock store.
//!
//! Every seeded entity has a [`Blueprint`]: a generator that drafts a complete `ActiveModel` with
//! random values for every column except the primary key. [`Factory`] drafts a record, lets
//! caller-supplied overrides replace any generated column, and inserts it so the store assigns a
//! fresh primary key. Overrides are never validated; whatever the caller sets is written as-is.

pub mod generate;

mod account;
mod engagement;
mod facility;
mod program;

use rand::{rngs::StdRng, SeedableRng};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, Iterable, Value,
};

/// Field generators for one entity.
pub trait Blueprint: ActiveModelTrait + ActiveModelBehavior + Send + 'static {
    /// Draft a record with every column except the primary key generated.
    ///
    /// Nullable columns resolve to either `None` or a generated value.
    fn draft(rng: &mut StdRng) -> Self;
}

/// Creates records from blueprints against a store connection.
pub struct Factory<'a, C: ConnectionTrait> {
    db: &'a C,
    rng: StdRng,
}

impl<'a, C: ConnectionTrait> Factory<'a, C> {
    /// Creates a factory drawing from an OS-seeded random stream.
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a factory with a deterministic random stream.
    pub fn with_seed(db: &'a C, seed: u64) -> Self {
        Self {
            db,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draft a record and apply `overrides` without inserting it.
    pub fn build<A: Blueprint>(&mut self, overrides: A) -> A {
        let mut record = A::draft(&mut self.rng);
        apply_overrides(&mut record, &overrides);

        record
    }

    /// Draft a record, apply `overrides` and insert it.
    ///
    /// # Arguments
    /// - `overrides` - Active model whose set columns take precedence over generated values,
    ///   use `Default::default()` to keep every generated value
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted record with its assigned primary key
    /// - `Err(DbErr)` - Insert failed, such as for a duplicate unique column
    pub async fn create<A>(
        &mut self,
        overrides: A,
    ) -> Result<<A::Entity as EntityTrait>::Model, DbErr>
    where
        A: Blueprint,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    {
        self.build(overrides).insert(self.db).await
    }

    /// Create `count` records, calling `overrides` with the factory's random stream and the
    /// record index to produce each record's overrides.
    ///
    /// Stops at the first failed insert; records created before it are kept.
    pub async fn create_many<A, F>(
        &mut self,
        count: usize,
        mut overrides: F,
    ) -> Result<Vec<<A::Entity as EntityTrait>::Model>, DbErr>
    where
        A: Blueprint,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
        F: FnMut(&mut StdRng, usize) -> A,
    {
        let mut records = Vec::with_capacity(count);
        for index in 0..count {
            let record_overrides = overrides(&mut self.rng, index);
            records.push(self.create(record_overrides).await?);
        }

        Ok(records)
    }
}

/// Copy every set column of `overrides` onto `record`.
///
/// Columns left `NotSet` in `overrides` keep the value already in `record`.
pub fn apply_overrides<A: ActiveModelTrait>(record: &mut A, overrides: &A) {
    for column in <A::Entity as EntityTrait>::Column::iter() {
        match overrides.get(column) {
            ActiveValue::Set(value) | ActiveValue::Unchanged(value) => record.set(column, value),
            ActiveValue::NotSet => {}
        }
    }
}

/// Turn an optional request field into an override, `None` leaves the column to the generator.
pub fn override_with<V: Into<Value>>(value: Option<V>) -> ActiveValue<V> {
    match value {
        Some(value) => ActiveValue::Set(value),
        None => ActiveValue::NotSet,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use agape_test_utils::prelude::*;
    use sea_orm::{ActiveValue, EntityTrait, PaginatorTrait};

    use super::Factory;

    /// Expect every created record to receive a distinct primary key
    #[tokio::test]
    async fn assigns_unique_primary_keys() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Venue)?;
        let mut factory = Factory::new(&test.db);

        let venues = factory
            .create_many(25, |_, _| entity::venue::ActiveModel::default())
            .await?;

        let ids: HashSet<i32> = venues.iter().map(|venue| venue.id).collect();
        assert_eq!(ids.len(), 25);

        Ok(())
    }

    /// Expect overridden columns to replace generated values and others to stay generated
    #[tokio::test]
    async fn overrides_take_precedence() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::User)?;
        let mut factory = Factory::new(&test.db);

        let user = factory
            .create(entity::user::ActiveModel {
                email: ActiveValue::Set("override@agape.test".to_string()),
                name: ActiveValue::Set("홍길동".to_string()),
                ..Default::default()
            })
            .await?;

        assert_eq!(user.email, "override@agape.test");
        assert_eq!(user.name, "홍길동");
        assert!(!user.role.is_empty());

        Ok(())
    }

    /// Expect a nullable column overridden with `None` to be stored as null
    #[tokio::test]
    async fn overrides_nullable_column_with_null() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Program)?;
        let mut factory = Factory::new(&test.db);

        for _ in 0..10 {
            let program = factory
                .create(entity::program::ActiveModel {
                    description: ActiveValue::Set(None),
                    ..Default::default()
                })
                .await?;

            assert!(program.description.is_none());
        }

        Ok(())
    }

    /// Expect out-of-range overrides to be stored without validation
    #[tokio::test]
    async fn stores_unvalidated_overrides() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Review)?;
        let mut factory = Factory::new(&test.db);

        let review = factory
            .create(entity::review::ActiveModel {
                rating: ActiveValue::Set(42),
                program_id: ActiveValue::Set(-1),
                ..Default::default()
            })
            .await?;

        assert_eq!(review.rating, 42);
        assert_eq!(review.program_id, -1);

        Ok(())
    }

    /// Expect build to draft a record without writing it to the store
    #[tokio::test]
    async fn build_does_not_insert() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Room)?;
        let mut factory = Factory::new(&test.db);

        let room = factory.build(entity::room::ActiveModel {
            venue_id: ActiveValue::Set(3),
            ..Default::default()
        });

        assert_eq!(room.venue_id, ActiveValue::Set(3));
        assert_eq!(room.id, ActiveValue::NotSet);
        assert_eq!(entity::prelude::Room::find().count(&test.db).await?, 0);

        Ok(())
    }

    /// Expect factories with the same seed to draft the same values
    #[tokio::test]
    async fn same_seed_drafts_same_values() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let mut first = Factory::with_seed(&test.db, 42);
        let mut second = Factory::with_seed(&test.db, 42);

        for _ in 0..5 {
            let a = first.build(entity::user::ActiveModel::default());
            let b = second.build(entity::user::ActiveModel::default());

            assert_eq!(a.email, b.email);
            assert_eq!(a.name, b.name);
            assert_eq!(a.phone, b.phone);
        }

        Ok(())
    }
}
