use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{
    AttendanceRecord, AttendanceUpdate, DateRange, Employee, EmployeeUpdate, Invitation,
    NewInvitation, NewUser, SalaryRecord, SalaryUpdate, UserInfo,
};

/// Routes under `/api/admin` plus the admin-only attendance routes.
pub struct AdminApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AdminApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn employees(&self) -> Result<Vec<Employee>> {
        self.client.get("/api/admin/employees").await
    }

    pub async fn update_employee(&self, id: i64, update: &EmployeeUpdate) -> Result<Employee> {
        self.client
            .put_json(&format!("/api/admin/employees/{id}"), update)
            .await
    }

    pub async fn users(&self) -> Result<Vec<UserInfo>> {
        self.client.get("/api/admin/users").await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<UserInfo> {
        self.client.post_json("/api/admin/users", user).await
    }

    pub async fn invitations(&self) -> Result<Vec<Invitation>> {
        self.client.get("/api/admin/invitations").await
    }

    /// Create an invitation; the backend emails the link to the invitee.
    pub async fn create_invitation(&self, invitation: &NewInvitation) -> Result<Invitation> {
        self.client
            .post_json("/api/admin/invitations", invitation)
            .await
    }

    pub async fn employee_salary_records(&self, employee_id: i64) -> Result<Vec<SalaryRecord>> {
        self.client
            .get(&format!("/api/admin/employees/{employee_id}/salary-records"))
            .await
    }

    pub async fn update_salary_record(
        &self,
        id: i64,
        update: &SalaryUpdate,
    ) -> Result<SalaryRecord> {
        self.client
            .put_json(&format!("/api/admin/salary-records/{id}"), update)
            .await
    }

    pub async fn employee_attendance(
        &self,
        employee_id: i64,
        range: DateRange,
    ) -> Result<Vec<AttendanceRecord>> {
        self.client
            .get_with_query(
                &format!("/api/attendance/employee/{employee_id}"),
                range.to_query(),
            )
            .await
    }

    pub async fn update_attendance(
        &self,
        id: i64,
        update: &AttendanceUpdate,
    ) -> Result<AttendanceRecord> {
        self.client
            .put_json(&format!("/api/attendance/{id}"), update)
            .await
    }
}
