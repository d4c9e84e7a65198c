use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::user::UserInfo;

/// Employee record as returned by `/api/employees/me` and `/api/admin/employees`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub user_id: i64,
    /// Company-issued identifier, e.g. `EMP-0042`.
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub hire_date: NaiveDate,
    pub department: Option<String>,
    pub position: Option<String>,
    pub base_salary: Option<Decimal>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Partial update of an employee record (admin only). Unset fields are left
/// untouched by the backend.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_salary: Option<Decimal>,
}
