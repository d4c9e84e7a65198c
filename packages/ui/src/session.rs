//! Platform session storage.
//!
//! - **Web** (WASM + `web` feature): `window.localStorage`, so the session
//!   survives a reload and is shared by tabs of the same origin.
//! - **Desktop** (native): a TOML file at `<data_dir>/staffdesk/session.toml`.
//! - Anything else: process memory.

use store::SessionStore;

#[cfg(not(target_arch = "wasm32"))]
const APP_DIR: &str = "staffdesk";

/// Create the session store for this platform. It starts unresolved; the auth
/// provider calls `initialize` after the first render.
pub fn make_session_store() -> SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalStorage::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        SessionStore::new(store::MemoryStorage::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(APP_DIR)
            .join("session.toml");
        tracing::debug!(path = %path.display(), "using file-backed session");
        SessionStore::new(store::FileStorage::new(path))
    }
}
