use chrono::Utc;
use entity::json::UserPreferences;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_NAME, TEST_PASSWORD_HASH},
    error::TestError,
    TestSetup,
};

impl TestSetup {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> UserFixtures<'a> {
    /// Insert a member account with the provided email.
    ///
    /// # Arguments
    /// - `email` - Email of the account, must be unique within the store
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - The inserted user
    /// - `Err(TestError::DbErr)` - Insert failed, such as for a duplicate email
    pub async fn insert_user(&self, email: &str) -> Result<entity::user::Model, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                name: ActiveValue::Set(TEST_NAME.to_string()),
                password_hash: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
                phone: ActiveValue::Set(None),
                role: ActiveValue::Set("member".to_string()),
                preferences: ActiveValue::Set(UserPreferences::default()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert `count` member accounts with emails `user{n}@agape.test`.
    pub async fn insert_users(&self, count: usize) -> Result<Vec<entity::user::Model>, TestError> {
        let mut users = Vec::with_capacity(count);
        for n in 0..count {
            users.push(self.insert_user(&format!("user{}@agape.test", n)).await?);
        }

        Ok(users)
    }
}
