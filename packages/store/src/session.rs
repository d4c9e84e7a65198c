//! # Session store — the single source of truth for who is signed in
//!
//! A [`Session`] is a bearer token plus the [`Role`] resolved for it. Both are
//! mandatory fields, so a token without a role (or the reverse) cannot be
//! represented in memory.
//!
//! [`SessionStore`] owns the current [`SessionState`] and mirrors it into a
//! [`DurableStorage`] backend under two keys, [`TOKEN_KEY`] and [`ROLE_KEY`],
//! which are always written, read and removed together.
//!
//! ## Lifecycle
//!
//! | Step | Method | Effect |
//! |------|--------|--------|
//! | App start | [`SessionStore::new`] | `loading = true`, no session. |
//! | First render | [`SessionStore::initialize`] | Restores a well-formed persisted pair, otherwise resolves empty. `loading = false`. |
//! | Login | [`SessionStore::set`] | Persists both keys, then publishes the session. |
//! | Logout / 401 | [`SessionStore::clear`] | Drops the session, then removes both keys. |
//!
//! The store is a cheap handle: clones share one state, so the auth gateway, the
//! HTTP client and the UI all observe the same session. The app runs on a single
//! event loop, hence `Rc<RefCell<_>>` rather than a lock.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::StorageError;
use crate::storage::DurableStorage;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "access_token";
/// Storage key for the resolved role.
pub const ROLE_KEY: &str = "user_role";

/// Access class of a signed-in user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
        }
    }

    /// Path of the dashboard this role lands on.
    pub fn home_path(self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Employee => "/employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role `{0}`")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "employee" => Ok(Role::Employee),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// An authenticated session.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    role: Role,
}

impl Session {
    pub fn new(token: impl Into<String>, role: Role) -> Self {
        Self {
            token: token.into(),
            role,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Snapshot of the authentication state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    /// `true` until persisted state has been restored (or found absent).
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(Session::token)
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(Session::role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Shared handle to the current session and its durable copy.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn DurableStorage>,
    state: Rc<RefCell<SessionState>>,
}

impl SessionStore {
    /// Create an unresolved store. Call [`initialize`](Self::initialize) before
    /// making any access decision.
    pub fn new(storage: impl DurableStorage + 'static) -> Self {
        Self {
            storage: Rc::new(storage),
            state: Rc::new(RefCell::new(SessionState::default())),
        }
    }

    /// Restore the persisted session, if any, and mark the store resolved.
    ///
    /// A persisted pair is restored only when both keys are present, the token
    /// is non-empty and the role is known. A stray half is removed so storage
    /// holds either both keys or neither. Storage read failures resolve to an
    /// empty session; they never abort start-up.
    pub fn initialize(&self) -> SessionState {
        let session = self.restore();
        let mut state = self.state.borrow_mut();
        state.session = session;
        state.loading = false;
        state.clone()
    }

    fn restore(&self) -> Option<Session> {
        let read = self
            .storage
            .read(TOKEN_KEY)
            .and_then(|token| Ok((token, self.storage.read(ROLE_KEY)?)));
        let (token, role) = match read {
            Ok(pair) => pair,
            Err(error) => {
                warn!(%error, "could not read persisted session, starting signed out");
                return None;
            }
        };

        match (token, role) {
            (None, None) => {
                debug!("no persisted session");
                None
            }
            (Some(token), Some(role)) => match role.parse::<Role>() {
                Ok(role) if !token.trim().is_empty() => {
                    debug!(%role, "restored persisted session");
                    Some(Session::new(token, role))
                }
                _ => {
                    warn!("discarding malformed persisted session");
                    self.discard();
                    None
                }
            },
            _ => {
                warn!("discarding partial persisted session");
                self.discard();
                None
            }
        }
    }

    fn discard(&self) {
        if let Err(error) = self.storage.remove(&[TOKEN_KEY, ROLE_KEY]) {
            warn!(%error, "failed to remove stale session entries");
        }
    }

    /// Persist and publish a new session.
    ///
    /// Both keys are written in one storage call before the in-memory state
    /// changes; if persisting fails, the previous state is kept.
    pub fn set(&self, token: impl Into<String>, role: Role) -> Result<(), StorageError> {
        let session = Session::new(token, role);
        self.storage
            .write(&[(TOKEN_KEY, session.token()), (ROLE_KEY, role.as_str())])?;

        let mut state = self.state.borrow_mut();
        state.session = Some(session);
        state.loading = false;
        info!(%role, "session established");
        Ok(())
    }

    /// Drop the session and remove it from durable storage.
    ///
    /// The in-memory session is gone even if the storage removal fails; the
    /// error is still returned so the caller can report it.
    pub fn clear(&self) -> Result<(), StorageError> {
        {
            let mut state = self.state.borrow_mut();
            state.session = None;
            state.loading = false;
        }
        info!("session cleared");
        self.storage.remove(&[TOKEN_KEY, ROLE_KEY])
    }

    /// Current state snapshot.
    pub fn get(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Token of the current session, if signed in.
    pub fn token(&self) -> Option<String> {
        self.state.borrow().token().map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;

    /// Storage whose writes and removals always fail.
    struct BrokenStorage;

    impl DurableStorage for BrokenStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("broken".into()))
        }

        fn write(&self, _entries: &[(&str, &str)]) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("broken".into()))
        }

        fn remove(&self, _keys: &[&str]) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("broken".into()))
        }
    }

    #[test]
    fn test_new_store_is_loading() {
        let store = SessionStore::new(MemoryStorage::new());
        let state = store.get();
        assert!(state.loading);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_initialize_empty() {
        let store = SessionStore::new(MemoryStorage::new());
        let state = store.initialize();
        assert!(!state.loading);
        assert_eq!(state.session, None);
        assert_eq!(store.get(), state);
    }

    #[test]
    fn test_initialize_restores_persisted_pair() {
        let storage = MemoryStorage::with_entries([(TOKEN_KEY, "tok-1"), (ROLE_KEY, "admin")]);
        let store = SessionStore::new(storage);

        let state = store.initialize();
        assert!(!state.loading);
        assert_eq!(state.token(), Some("tok-1"));
        assert_eq!(state.role(), Some(Role::Admin));
    }

    #[test]
    fn test_initialize_discards_partial_pair() {
        let storage = MemoryStorage::with_entries([(TOKEN_KEY, "tok-1")]);
        let store = SessionStore::new(storage.clone());

        let state = store.initialize();
        assert!(!state.loading);
        assert!(!state.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_initialize_discards_unknown_role() {
        let storage = MemoryStorage::with_entries([(TOKEN_KEY, "tok-1"), (ROLE_KEY, "root")]);
        let store = SessionStore::new(storage.clone());

        assert!(!store.initialize().is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_initialize_discards_blank_token() {
        let storage = MemoryStorage::with_entries([(TOKEN_KEY, "  "), (ROLE_KEY, "employee")]);
        let store = SessionStore::new(storage.clone());

        assert!(!store.initialize().is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_initialize_survives_unreadable_storage() {
        let store = SessionStore::new(BrokenStorage);
        let state = store.initialize();
        assert!(!state.loading);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_set_then_get() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.initialize();

        store.set("tok-2", Role::Employee).unwrap();

        let state = store.get();
        assert_eq!(state.token(), Some("tok-2"));
        assert_eq!(state.role(), Some(Role::Employee));
        assert!(state.is_authenticated());
        assert_eq!(storage.read(TOKEN_KEY).unwrap().as_deref(), Some("tok-2"));
        assert_eq!(storage.read(ROLE_KEY).unwrap().as_deref(), Some("employee"));
    }

    #[test]
    fn test_failed_set_keeps_previous_state() {
        let store = SessionStore::new(BrokenStorage);
        store.initialize();

        assert!(store.set("tok", Role::Admin).is_err());
        assert!(!store.get().is_authenticated());
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.set("tok-3", Role::Admin).unwrap();

        store.clear().unwrap();

        let state = store.get();
        assert_eq!(state.token(), None);
        assert_eq!(state.role(), None);
        assert!(!state.is_authenticated());
        assert!(!storage.contains(TOKEN_KEY));
        assert!(!storage.contains(ROLE_KEY));
    }

    #[test]
    fn test_clear_drops_memory_even_if_storage_fails() {
        let store = SessionStore::new(BrokenStorage);
        store.state.borrow_mut().session = Some(Session::new("tok", Role::Admin));

        assert!(store.clear().is_err());
        assert!(!store.get().is_authenticated());
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::new(MemoryStorage::new());
        let other = store.clone();
        store.set("tok-4", Role::Employee).unwrap();
        assert_eq!(other.token().as_deref(), Some("tok-4"));

        other.clear().unwrap();
        assert!(!store.get().is_authenticated());
    }

    #[test]
    fn test_session_survives_restart() {
        let storage = MemoryStorage::new();
        SessionStore::new(storage.clone())
            .set("tok-5", Role::Admin)
            .unwrap();

        let restarted = SessionStore::new(storage);
        assert!(restarted.get().loading);
        let state = restarted.initialize();
        assert_eq!(state.token(), Some("tok-5"));
        assert_eq!(state.role(), Some(Role::Admin));
    }

    #[test]
    fn test_debug_redacts_token() {
        let session = Session::new("super-secret", Role::Admin);
        let printed = format!("{session:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("Admin"));
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("employee".parse::<Role>(), Ok(Role::Employee));
        assert_eq!(
            "Admin".parse::<Role>(),
            Err(UnknownRole("Admin".to_string()))
        );
        assert_eq!(Role::Admin.home_path(), "/admin");
        assert_eq!(Role::Employee.home_path(), "/employee");
    }
}
