//! # Access guard
//!
//! Decides what a protected view does for a given [`SessionState`], without
//! depending on any UI toolkit. The UI calls [`GuardState::evaluate`] every
//! time the session changes, not only on mount.
//!
//! | State | Condition | Action |
//! |-------|-----------|--------|
//! | `Pending` | store not initialised | wait, render nothing protected |
//! | `Unauthenticated` | resolved, no session | redirect to login |
//! | `WrongRole` | session role differs from the required one | redirect to that role's home |
//! | `Authorized` | session present, role matches or none required | render |

use store::{Role, SessionState};

/// Where a redirect goes. The UI maps these to its routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Login,
    Home(Role),
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Destination::Login => "/login",
            Destination::Home(role) => role.home_path(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Pending,
    Unauthenticated,
    WrongRole { actual: Role },
    Authorized,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardAction {
    Wait,
    Redirect(Destination),
    Render,
}

impl GuardState {
    pub fn evaluate(state: &SessionState, required: Option<Role>) -> Self {
        if state.loading {
            return GuardState::Pending;
        }
        match (state.role(), required) {
            (None, _) => GuardState::Unauthenticated,
            (Some(actual), Some(required)) if actual != required => {
                GuardState::WrongRole { actual }
            }
            (Some(_), _) => GuardState::Authorized,
        }
    }

    pub fn action(self) -> GuardAction {
        match self {
            GuardState::Pending => GuardAction::Wait,
            GuardState::Unauthenticated => GuardAction::Redirect(Destination::Login),
            GuardState::WrongRole { actual } => GuardAction::Redirect(Destination::Home(actual)),
            GuardState::Authorized => GuardAction::Render,
        }
    }
}

/// The public views that redirect based on the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryView {
    /// `/`: always forwards somewhere.
    Root,
    /// `/login`: forwards only when already signed in.
    Login,
}

/// Redirect for a public entry view, or `None` to stay.
///
/// Nothing is decided while the store is still loading.
pub fn entry_redirect(state: &SessionState, view: EntryView) -> Option<Destination> {
    if state.loading {
        return None;
    }
    match (state.role(), view) {
        (Some(role), _) => Some(Destination::Home(role)),
        (None, EntryView::Root) => Some(Destination::Login),
        (None, EntryView::Login) => None,
    }
}

#[cfg(test)]
mod tests {
    use store::Session;

    use super::*;

    fn loading() -> SessionState {
        SessionState::default()
    }

    fn signed_out() -> SessionState {
        SessionState {
            session: None,
            loading: false,
        }
    }

    fn signed_in(role: Role) -> SessionState {
        SessionState {
            session: Some(Session::new("tok", role)),
            loading: false,
        }
    }

    #[test]
    fn test_pending_never_renders_or_redirects() {
        for required in [None, Some(Role::Admin), Some(Role::Employee)] {
            let state = GuardState::evaluate(&loading(), required);
            assert_eq!(state, GuardState::Pending);
            assert_eq!(state.action(), GuardAction::Wait);
        }
        // A session already present but still flagged loading is not trusted yet.
        let mut state = signed_in(Role::Admin);
        state.loading = true;
        assert_eq!(GuardState::evaluate(&state, Some(Role::Admin)), GuardState::Pending);
    }

    #[test]
    fn test_wrong_role_goes_home_not_to_login() {
        let state = GuardState::evaluate(&signed_in(Role::Employee), Some(Role::Admin));
        assert_eq!(state, GuardState::WrongRole { actual: Role::Employee });
        assert_eq!(
            state.action(),
            GuardAction::Redirect(Destination::Home(Role::Employee))
        );
        assert_eq!(Destination::Home(Role::Employee).path(), "/employee");

        let state = GuardState::evaluate(&signed_in(Role::Admin), Some(Role::Employee));
        assert_eq!(state.action(), GuardAction::Redirect(Destination::Home(Role::Admin)));
    }

    #[test]
    fn test_no_session_goes_to_login() {
        for required in [None, Some(Role::Admin), Some(Role::Employee)] {
            let state = GuardState::evaluate(&signed_out(), required);
            assert_eq!(state, GuardState::Unauthenticated);
            assert_eq!(state.action(), GuardAction::Redirect(Destination::Login));
        }
    }

    #[test]
    fn test_authorized() {
        assert_eq!(
            GuardState::evaluate(&signed_in(Role::Admin), Some(Role::Admin)).action(),
            GuardAction::Render
        );
        assert_eq!(
            GuardState::evaluate(&signed_in(Role::Employee), None).action(),
            GuardAction::Render
        );
    }

    #[test]
    fn test_reevaluates_after_logout() {
        let mut state = signed_in(Role::Admin);
        assert_eq!(GuardState::evaluate(&state, Some(Role::Admin)), GuardState::Authorized);
        state.session = None;
        assert_eq!(
            GuardState::evaluate(&state, Some(Role::Admin)),
            GuardState::Unauthenticated
        );
    }

    #[test]
    fn test_entry_redirects() {
        assert_eq!(entry_redirect(&loading(), EntryView::Root), None);
        assert_eq!(
            entry_redirect(&signed_out(), EntryView::Root),
            Some(Destination::Login)
        );
        assert_eq!(entry_redirect(&signed_out(), EntryView::Login), None);
        assert_eq!(
            entry_redirect(&signed_in(Role::Admin), EntryView::Login),
            Some(Destination::Home(Role::Admin))
        );
        assert_eq!(
            entry_redirect(&signed_in(Role::Employee), EntryView::Root),
            Some(Destination::Home(Role::Employee))
        );
    }
}
