use sea_orm::DatabaseConnection;

use crate::server::service::seed::plan::SeedPlan;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Plan used by the seed route
    pub seed_plan: SeedPlan,
    pub seed_rng: Option<u64>,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            seed_plan: SeedPlan::default(),
            seed_rng: None,
        }
    }
}
