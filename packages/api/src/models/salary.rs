use chrono::{Month, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryStatus {
    Pending,
    Paid,
    Overdue,
}

impl SalaryStatus {
    pub fn label(self) -> &'static str {
        match self {
            SalaryStatus::Pending => "Pending",
            SalaryStatus::Paid => "Paid",
            SalaryStatus::Overdue => "Overdue",
        }
    }
}

/// Monthly payroll entry, computed by the backend.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SalaryRecord {
    pub id: i64,
    pub employee_id: i64,
    /// 1-based month.
    pub month: u32,
    pub year: i32,
    pub base_amount: Decimal,
    #[serde(default)]
    pub overtime_amount: Decimal,
    #[serde(default)]
    pub deductions: Decimal,
    #[serde(default)]
    pub bonus: Decimal,
    pub net_amount: Decimal,
    pub status: SalaryStatus,
    pub payment_date: Option<NaiveDate>,
}

impl SalaryRecord {
    /// "March 2024"; falls back to "3/2024" for an out-of-range month.
    pub fn period(&self) -> String {
        match u8::try_from(self.month).ok().and_then(|m| Month::try_from(m).ok()) {
            Some(month) => format!("{} {}", month.name(), self.year),
            None => format!("{}/{}", self.month, self.year),
        }
    }
}

/// Partial update of a salary record (admin only).
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SalaryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SalaryStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overtime_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deductions: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_amount: Option<Decimal>,
}

impl SalaryUpdate {
    /// Change only the payment status.
    pub fn status(status: SalaryStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
