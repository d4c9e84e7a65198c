//! # Client-side session persistence
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`storage`] | The [`DurableStorage`] trait every backend implements. |
//! | [`session`] | [`SessionStore`], [`Session`], [`SessionState`] and [`Role`]. |
//! | `memory` | [`MemoryStorage`], process-local, for tests. |
//! | `file_store` | [`FileStorage`], a TOML file for desktop builds. |
//! | `local` | `LocalStorage`, `window.localStorage` (wasm32 + `web` feature). |

pub mod error;
pub mod session;
pub mod storage;

mod file_store;
mod memory;
pub use file_store::FileStorage;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use error::StorageError;
pub use session::{Role, Session, SessionState, SessionStore, UnknownRole, ROLE_KEY, TOKEN_KEY};
pub use storage::DurableStorage;
