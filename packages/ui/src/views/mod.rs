mod layout;
pub use layout::{AdminLayout, EmployeeLayout, ErrorBanner};

mod entry;
pub use entry::{Login, NotFound, Root};

mod invitation;
pub use invitation::InvitationAccept;

mod admin;
pub use admin::{AdminAttendance, AdminEmployees, AdminOverview, AdminSalary};

mod employee;
pub use employee::{EmployeeAttendance, EmployeeOverview, EmployeeProfile, EmployeeSalary};

mod format;
