use sea_orm::{ConnectionTrait, DbErr, SqlErr};

use crate::{
    model::user::{LoginDto, RegisterDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{api::ApiError, Error},
        util::password::{hash_password, verify_password},
    },
};

/// Service for registering and logging in mock accounts.
pub struct AuthService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Register a new member account.
    ///
    /// # Arguments
    /// - `registration` - Email, name, password and optional phone of the new account
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created account
    /// - `Err(Error::ApiError(ApiError::InvalidBody))` - Email or password is empty
    /// - `Err(Error::ApiError(ApiError::EmailTaken))` - An account already uses the email, the
    ///   existing account is left untouched
    /// - `Err(Error::DbErr)` - Store operation failed
    pub async fn register(&self, registration: RegisterDto) -> Result<UserDto, Error> {
        let email = registration.email.trim();
        if email.is_empty() || registration.password.is_empty() {
            return Err(ApiError::InvalidBody("email and password are required".to_string()).into());
        }

        let user_repository = UserRepository::new(self.db);

        if user_repository.find_by_email(email).await?.is_some() {
            return Err(ApiError::EmailTaken(email.to_string()).into());
        }

        let user = user_repository
            .create(
                email,
                &registration.name,
                &hash_password(&registration.password),
                registration.phone,
            )
            .await
            .map_err(|err| {
                // Lost a race against a concurrent registration of the same email
                if is_unique_violation(&err) {
                    Error::from(ApiError::EmailTaken(email.to_string()))
                } else {
                    Error::from(err)
                }
            })?;

        tracing::info!("Registered user ID {} ({})", user.id, user.email);

        Ok(user.into())
    }

    /// Check an email and password against the stored accounts.
    ///
    /// Unknown emails and wrong passwords both return [`ApiError::InvalidCredentials`].
    pub async fn login(&self, credentials: LoginDto) -> Result<UserDto, Error> {
        let user_repository = UserRepository::new(self.db);

        let user = user_repository
            .find_by_email(credentials.email.trim())
            .await?
            .filter(|user| verify_password(&credentials.password, &user.password_hash))
            .ok_or(ApiError::InvalidCredentials)?;

        Ok(user.into())
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[cfg(test)]
mod tests {
    mod register {
        use agape_test_utils::prelude::*;

        use crate::{
            model::user::RegisterDto,
            server::{
                data::user::UserRepository,
                error::{api::ApiError, Error},
                service::auth::AuthService,
            },
        };

        fn registration(email: &str, name: &str, password: &str) -> RegisterDto {
            RegisterDto {
                email: email.to_string(),
                name: name.to_string(),
                password: password.to_string(),
                phone: None,
            }
        }

        /// Expect a member account to be created for a new email
        #[tokio::test]
        async fn registers_new_email() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;
            let auth_service = AuthService::new(&test.db);

            let result = auth_service.register(registration("a@b.com", "X", "p")).await;

            assert!(result.is_ok());
            let user = result.unwrap();
            assert_eq!(user.email, "a@b.com");
            assert_eq!(user.name, "X");
            assert_eq!(user.role, "member");

            Ok(())
        }

        /// Expect EmailTaken and an unmodified original account for a duplicate email
        #[tokio::test]
        async fn rejects_duplicate_email() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;
            let auth_service = AuthService::new(&test.db);
            let user_repository = UserRepository::new(&test.db);

            let first = auth_service.register(registration("a@b.com", "X", "p")).await;
            assert!(first.is_ok());
            let original = user_repository.find_by_email("a@b.com").await?;

            let second = auth_service
                .register(registration("a@b.com", "Y", "other"))
                .await;

            assert!(matches!(
                second,
                Err(Error::ApiError(ApiError::EmailTaken(_)))
            ));
            assert_eq!(user_repository.find_by_email("a@b.com").await?, original);
            assert_eq!(user_repository.get_all().await?.len(), 1);

            Ok(())
        }

        /// Expect InvalidBody when the email or password is empty
        #[tokio::test]
        async fn rejects_empty_credentials() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;
            let auth_service = AuthService::new(&test.db);

            let no_email = auth_service.register(registration("  ", "X", "p")).await;
            let no_password = auth_service.register(registration("a@b.com", "X", "")).await;

            assert!(matches!(
                no_email,
                Err(Error::ApiError(ApiError::InvalidBody(_)))
            ));
            assert!(matches!(
                no_password,
                Err(Error::ApiError(ApiError::InvalidBody(_)))
            ));

            Ok(())
        }

        /// Expect Error when required tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            let auth_service = AuthService::new(&test.db);

            let result = auth_service.register(registration("a@b.com", "X", "p")).await;

            assert!(matches!(result, Err(Error::DbErr(_))));

            Ok(())
        }
    }

    mod login {
        use agape_test_utils::prelude::*;

        use crate::{
            model::user::{LoginDto, RegisterDto},
            server::{
                error::{api::ApiError, Error},
                service::auth::AuthService,
            },
        };

        fn credentials(email: &str, password: &str) -> LoginDto {
            LoginDto {
                email: email.to_string(),
                password: password.to_string(),
            }
        }

        /// Expect the account back for a matching email and password
        #[tokio::test]
        async fn logs_in_with_correct_password() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;
            let auth_service = AuthService::new(&test.db);
            let registered = auth_service
                .register(RegisterDto {
                    email: "a@b.com".to_string(),
                    name: "X".to_string(),
                    password: "p".to_string(),
                    phone: None,
                })
                .await;
            assert!(registered.is_ok());

            let result = auth_service.login(credentials("a@b.com", "p")).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().id, registered.unwrap().id);

            Ok(())
        }

        /// Expect InvalidCredentials for a wrong password or an unknown email
        #[tokio::test]
        async fn rejects_invalid_credentials() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;
            test.user().insert_user("a@b.com").await?;
            let auth_service = AuthService::new(&test.db);

            let wrong_password = auth_service.login(credentials("a@b.com", "nope")).await;
            let unknown_email = auth_service.login(credentials("c@d.com", "p")).await;

            assert!(matches!(
                wrong_password,
                Err(Error::ApiError(ApiError::InvalidCredentials))
            ));
            assert!(matches!(
                unknown_email,
                Err(Error::ApiError(ApiError::InvalidCredentials))
            ));

            Ok(())
        }
    }
}
