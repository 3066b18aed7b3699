//! Employee Model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Employee role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EmployeeRole {
    Waiter,
    Cashier,
    Cook,
    Manager,
}

/// Employee entity
///
/// Employees are soft-deleted via `is_active`; orders keep referencing
/// deactivated employees and enrichment still resolves them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub first_name: String,
    pub last_name: String,
    pub role: EmployeeRole,
    pub email: String,
    pub phone_number: String,
    pub hire_date: DateTime<Utc>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Employee {
    /// Display name used in enriched order views
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
