use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Local-storage keys the UI persists through the storage routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageKey {
    AdminMedications,
    AdminMedicationSchedules,
    MealPlans,
    WeeklyMeal,
    CareHistory,
    Residents,
    LedgerEntries,
}

impl StorageKey {
    pub const ALL: [StorageKey; 7] = [
        Self::AdminMedications,
        Self::AdminMedicationSchedules,
        Self::MealPlans,
        Self::WeeklyMeal,
        Self::CareHistory,
        Self::Residents,
        Self::LedgerEntries,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdminMedications => "admin_medications",
            Self::AdminMedicationSchedules => "admin_medication_schedules",
            Self::MealPlans => "agape_meal_plans_enhanced",
            Self::WeeklyMeal => "agape_weekly_meal_enhanced",
            Self::CareHistory => "agape_care_history",
            Self::Residents => "agape_residents",
            Self::LedgerEntries => "agape_ledger_entries",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|candidate| candidate.as_str() == key)
    }
}

/// The array stored under a storage key
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct StorageDto {
    pub key: String,
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<Value>,
}

/// Replacement array for a storage key
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct StorageBodyDto {
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<Value>,
}
