use chrono::Utc;
use sea_orm::{sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait};
use serde_json::Value;

pub struct ClientStorageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClientStorageRepository<'a, C> {
    /// Creates a new instance of [`ClientStorageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get the entry stored under `key`, None if it was never written
    pub async fn get(&self, key: &str) -> Result<Option<entity::client_storage::Model>, DbErr> {
        entity::prelude::ClientStorage::find_by_id(key.to_string())
            .one(self.db)
            .await
    }

    /// Replace the array stored under `key` wholesale, creating the entry if needed
    pub async fn upsert(
        &self,
        key: &str,
        items: Vec<Value>,
    ) -> Result<entity::client_storage::Model, DbErr> {
        let entry = entity::client_storage::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            items: ActiveValue::Set(Value::Array(items)),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::ClientStorage::insert(entry)
            .on_conflict(
                OnConflict::column(entity::client_storage::Column::Key)
                    .update_columns([
                        entity::client_storage::Column::Items,
                        entity::client_storage::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }
}
