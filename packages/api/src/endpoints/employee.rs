use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{
    AttendanceRecord, AttendanceSubmission, ClockEvent, DateRange, Employee, SalaryRecord,
};

/// Self-service routes for the signed-in employee.
pub struct EmployeeApi<'a> {
    client: &'a ApiClient,
}

impl<'a> EmployeeApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// The caller's own employee record. 404 when the account has none.
    pub async fn me(&self) -> Result<Employee> {
        self.client.get("/api/employees/me").await
    }

    pub async fn my_salary_records(&self) -> Result<Vec<SalaryRecord>> {
        self.client.get("/api/employees/me/salary-records").await
    }

    /// Newest first, optionally restricted to `range`.
    pub async fn my_attendance(&self, range: DateRange) -> Result<Vec<AttendanceRecord>> {
        self.client
            .get_with_query("/api/attendance/my-attendance", range.to_query())
            .await
    }

    pub async fn check_in(&self) -> Result<ClockEvent> {
        self.client.post_empty("/api/attendance/check-in").await
    }

    pub async fn check_out(&self) -> Result<ClockEvent> {
        self.client.post_empty("/api/attendance/check-out").await
    }

    /// File a day ahead of time, typically a leave request.
    pub async fn submit_attendance(
        &self,
        submission: &AttendanceSubmission,
    ) -> Result<AttendanceRecord> {
        self.client.post_json("/api/attendance/", submission).await
    }
}
