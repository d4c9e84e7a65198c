//! Employee self-service dashboard.

mod attendance;
mod overview;
mod profile;
mod salary;

pub use attendance::EmployeeAttendance;
pub use overview::EmployeeOverview;
pub use profile::EmployeeProfile;
pub use salary::EmployeeSalary;
