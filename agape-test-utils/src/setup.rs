use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Isolated store for a single test.
///
/// Every instance connects to its own `sqlite::memory:` database, so tests never observe each
/// other's records.
pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Convert the test store into any type that can be constructed from a connection.
    /// This allows conversion to AppState without creating a circular dependency.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates every table of the mock store.
#[macro_export]
macro_rules! test_setup_with_all_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::AuthProvider),
                schema.create_table_from_entity(entity::prelude::Venue),
                schema.create_table_from_entity(entity::prelude::Room),
                schema.create_table_from_entity(entity::prelude::Program),
                schema.create_table_from_entity(entity::prelude::Session),
                schema.create_table_from_entity(entity::prelude::RoomReservation),
                schema.create_table_from_entity(entity::prelude::AiInteraction),
                schema.create_table_from_entity(entity::prelude::ProgramParticipant),
                schema.create_table_from_entity(entity::prelude::Device),
                schema.create_table_from_entity(entity::prelude::DeviceRental),
                schema.create_table_from_entity(entity::prelude::UserActivity),
                schema.create_table_from_entity(entity::prelude::Review),
                schema.create_table_from_entity(entity::prelude::Notification),
                schema.create_table_from_entity(entity::prelude::Benefit),
                schema.create_table_from_entity(entity::prelude::Membership),
                schema.create_table_from_entity(entity::prelude::Message),
                schema.create_table_from_entity(entity::prelude::Equipment),
                schema.create_table_from_entity(entity::prelude::Reservation),
                schema.create_table_from_entity(entity::prelude::ClientStorage),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
