//! Shared values for fixtures and request bodies used across tests.

/// Email address used for fixture users unless a test needs several distinct accounts.
pub static TEST_EMAIL: &str = "resident.family@agape.test";

/// Display name used for fixture users.
pub static TEST_NAME: &str = "김영희";

/// Placeholder stored in `password_hash` for users inserted directly by fixtures.
///
/// Not a valid hash of any password, logins against fixture users always fail.
pub static TEST_PASSWORD_HASH: &str = "fixture-password-hash";
