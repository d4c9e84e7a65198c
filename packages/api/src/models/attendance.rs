use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Leave,
    Holiday,
    SickLeave,
    Vacation,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 6] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Leave,
        AttendanceStatus::Holiday,
        AttendanceStatus::SickLeave,
        AttendanceStatus::Vacation,
    ];

    /// Statuses an employee may file ahead of time.
    pub const LEAVE_KINDS: [AttendanceStatus; 3] = [
        AttendanceStatus::Leave,
        AttendanceStatus::SickLeave,
        AttendanceStatus::Vacation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Leave => "leave",
            AttendanceStatus::Holiday => "holiday",
            AttendanceStatus::SickLeave => "sick_leave",
            AttendanceStatus::Vacation => "vacation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Leave => "Leave",
            AttendanceStatus::Holiday => "Holiday",
            AttendanceStatus::SickLeave => "Sick leave",
            AttendanceStatus::Vacation => "Vacation",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

/// One day of attendance for one employee.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub check_in_time: Option<NaiveDateTime>,
    pub check_out_time: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

/// A day filed by the employee, typically a leave request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AttendanceSubmission {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Correction of an existing record (admin only).
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct AttendanceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AttendanceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_time: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Acknowledgement of a check-in or check-out.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClockEvent {
    pub message: String,
    pub time: NaiveDateTime,
}

/// Optional inclusive date window for attendance listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub(crate) fn to_query(self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(start) = self.start {
            query.push(("start_date".to_string(), start.to_string()));
        }
        if let Some(end) = self.end {
            query.push(("end_date".to_string(), end.to_string()));
        }
        query
    }
}
