use dioxus::prelude::*;
use store::Role;

use crate::icons::{FaCalendarCheck, FaGauge, FaMoneyBill, FaUser, FaUsers};
use crate::{Icon, Route};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    Dashboard,
    People,
    Profile,
    Attendance,
    Salary,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub label: &'static str,
    pub route: Route,
    pub icon: MenuIcon,
}

/// Navigation for a role. The admin and employee menus share no entries.
pub fn menu_for(role: Role) -> Vec<MenuItem> {
    match role {
        Role::Admin => vec![
            MenuItem {
                label: "Dashboard",
                route: Route::AdminOverview {},
                icon: MenuIcon::Dashboard,
            },
            MenuItem {
                label: "Employees",
                route: Route::AdminEmployees {},
                icon: MenuIcon::People,
            },
            MenuItem {
                label: "Attendance",
                route: Route::AdminAttendance {},
                icon: MenuIcon::Attendance,
            },
            MenuItem {
                label: "Salary",
                route: Route::AdminSalary {},
                icon: MenuIcon::Salary,
            },
        ],
        Role::Employee => vec![
            MenuItem {
                label: "Dashboard",
                route: Route::EmployeeOverview {},
                icon: MenuIcon::Dashboard,
            },
            MenuItem {
                label: "My Profile",
                route: Route::EmployeeProfile {},
                icon: MenuIcon::Profile,
            },
            MenuItem {
                label: "Attendance",
                route: Route::EmployeeAttendance {},
                icon: MenuIcon::Attendance,
            },
            MenuItem {
                label: "Salary",
                route: Route::EmployeeSalary {},
                icon: MenuIcon::Salary,
            },
        ],
    }
}

#[component]
pub fn Sidebar(role: Role) -> Element {
    let title = match role {
        Role::Admin => "Admin Panel",
        Role::Employee => "Employee Portal",
    };

    rsx! {
        nav {
            class: "sidebar",
            div { class: "sidebar-title", "{title}" }

            div {
                class: "sidebar-menu",
                for item in menu_for(role) {
                    Link {
                        key: "{item.label}",
                        to: item.route.clone(),
                        class: "menu-item",
                        active_class: "active",
                        MenuGlyph { icon: item.icon }
                        span { "{item.label}" }
                    }
                }
            }
        }
    }
}

#[component]
fn MenuGlyph(icon: MenuIcon) -> Element {
    match icon {
        MenuIcon::Dashboard => rsx! { Icon { icon: FaGauge, width: 16, height: 16 } },
        MenuIcon::People => rsx! { Icon { icon: FaUsers, width: 16, height: 16 } },
        MenuIcon::Profile => rsx! { Icon { icon: FaUser, width: 16, height: 16 } },
        MenuIcon::Attendance => rsx! { Icon { icon: FaCalendarCheck, width: 16, height: 16 } },
        MenuIcon::Salary => rsx! { Icon { icon: FaMoneyBill, width: 16, height: 16 } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menus_are_disjoint_and_scoped() {
        let admin = menu_for(Role::Admin);
        let employee = menu_for(Role::Employee);

        for item in &admin {
            assert!(item.route.to_string().starts_with("/admin"));
            assert!(!employee.iter().any(|other| other.route == item.route));
        }
        for item in &employee {
            assert!(item.route.to_string().starts_with("/employee"));
        }
    }

    #[test]
    fn test_menus_start_at_role_home() {
        for role in [Role::Admin, Role::Employee] {
            assert_eq!(menu_for(role)[0].route.to_string(), role.home_path());
        }
    }
}
