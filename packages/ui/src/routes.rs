use api::Destination;
use dioxus::prelude::*;
use store::Role;

use crate::views::{
    AdminAttendance, AdminEmployees, AdminLayout, AdminOverview, AdminSalary, EmployeeAttendance,
    EmployeeLayout, EmployeeOverview, EmployeeProfile, EmployeeSalary, InvitationAccept, Login,
    NotFound, Root,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/invitation/accept?:token")]
    InvitationAccept { token: String },
    #[layout(AdminLayout)]
        #[route("/admin")]
        AdminOverview {},
        #[route("/admin/employees")]
        AdminEmployees {},
        #[route("/admin/attendance")]
        AdminAttendance {},
        #[route("/admin/salary")]
        AdminSalary {},
    #[end_layout]
    #[layout(EmployeeLayout)]
        #[route("/employee")]
        EmployeeOverview {},
        #[route("/employee/profile")]
        EmployeeProfile {},
        #[route("/employee/attendance")]
        EmployeeAttendance {},
        #[route("/employee/salary")]
        EmployeeSalary {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Login => Route::Login {},
            Destination::Home(Role::Admin) => Route::AdminOverview {},
            Destination::Home(Role::Employee) => Route::EmployeeOverview {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destinations_match_route_paths() {
        for destination in [
            Destination::Login,
            Destination::Home(Role::Admin),
            Destination::Home(Role::Employee),
        ] {
            assert_eq!(Route::from(destination).to_string(), destination.path());
        }
    }

    #[test]
    fn test_invitation_route_reads_token_from_query() {
        let route = "/invitation/accept?token=abc123".parse::<Route>().ok();
        assert_eq!(
            route,
            Some(Route::InvitationAccept {
                token: "abc123".to_string()
            })
        );
    }

    #[test]
    fn test_each_invitation_link_is_its_own_route() {
        let first = "/invitation/accept?token=abc123".parse::<Route>().ok();
        let second = "/invitation/accept?token=xyz789".parse::<Route>().ok();
        assert_ne!(first, second);
        assert_eq!(
            second,
            Some(Route::InvitationAccept {
                token: "xyz789".to_string()
            })
        );
    }
}
