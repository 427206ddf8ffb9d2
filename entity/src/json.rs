//! Structured JSON column types.
//!
//! These are stored as JSON text and decoded on read, so handlers never stringify or parse them
//! by hand.

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// UI preferences of a user account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub language: String,
    pub theme: String,
    pub email_notifications: bool,
    pub sms_notifications: bool,
}

/// Facility details of a venue.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(rename_all = "camelCase", default)]
pub struct VenueMeta {
    pub amenities: Vec<String>,
    pub parking: bool,
    pub wheelchair_accessible: bool,
}

/// Perks advertised for a program, serialized as a plain array of labels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ProgramBenefits(pub Vec<String>);

/// Request context recorded with a user activity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityMeta {
    pub path: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Benefit IDs granted by a membership tier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct MembershipBenefits(pub Vec<i32>);
