use agape::server::{config::Config, startup::connect_to_database};
use sea_orm::{EntityTrait, PaginatorTrait};

fn memory_config() -> Config {
    Config::from_lookup(|_| Err(std::env::VarError::NotPresent)).expect("default config")
}

/// Expect migrations to create every table on a fresh in-memory store
#[tokio::test]
async fn connect_runs_migrations() {
    let db = connect_to_database(&memory_config())
        .await
        .expect("connect and migrate");

    assert_eq!(entity::prelude::User::find().count(&db).await.unwrap(), 0);
    assert_eq!(entity::prelude::Program::find().count(&db).await.unwrap(), 0);
    assert_eq!(entity::prelude::Reservation::find().count(&db).await.unwrap(), 0);
    assert_eq!(entity::prelude::ClientStorage::find().count(&db).await.unwrap(), 0);
}

/// Expect the store to persist across queries on the single pooled connection
#[tokio::test]
async fn memory_store_survives_between_queries() {
    use agape::server::service::seed::{plan::SeedPlan, SeedService};

    let db = connect_to_database(&memory_config())
        .await
        .expect("connect and migrate");

    let summary = SeedService::new(&db)
        .with_plan(SeedPlan::small())
        .seed_database()
        .await
        .expect("seed");

    assert_eq!(
        entity::prelude::User::find().count(&db).await.unwrap(),
        summary.users
    );
}
