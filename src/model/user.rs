use chrono::NaiveDateTime;
use entity::json::UserPreferences;
use serde::{Deserialize, Serialize};

/// A user account, without its password hash
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: String,
    #[schema(value_type = Object)]
    pub preferences: UserPreferences,
    pub created_at: NaiveDateTime,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            phone: user.phone,
            role: user.role,
            preferences: user.preferences,
            created_at: user.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserListDto {
    pub users: Vec<UserDto>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserResponseDto {
    pub user: UserDto,
}

/// Registration request, missing fields default to empty strings
#[derive(Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct RegisterDto {
    pub email: String,
    pub name: String,
    pub password: String,
    pub phone: Option<String>,
}

#[derive(Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// The response of a successful registration or login
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuthResponseDto {
    pub message: String,
    pub user: UserDto,
}
