//! Wire models for the backend REST API.
//!
//! These mirror the backend's response schemas; the client never computes
//! payroll or attendance figures itself.

mod attendance;
mod employee;
mod invitation;
mod salary;
pub(crate) mod timestamp;
mod user;

pub use attendance::{
    AttendanceRecord, AttendanceStatus, AttendanceSubmission, AttendanceUpdate, ClockEvent,
    DateRange,
};
pub use employee::{Employee, EmployeeUpdate};
pub use invitation::{
    AcceptedInvitation, Invitation, InvitationAcceptance, InvitationPreview, InvitationStatus,
    NewInvitation,
};
pub use salary::{SalaryRecord, SalaryStatus, SalaryUpdate};
pub use user::{NewUser, TokenResponse, UserInfo};
