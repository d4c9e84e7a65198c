//! # Client settings
//!
//! The only external contract is the backend base URL; the auth section picks
//! how the gateway resolves a role after login.
//!
//! ```toml
//! [api]
//! url = "http://localhost:8000"
//!
//! [auth]
//! roles = "identity"              # or "username"
//! identity = "/api/employees/me"  # endpoint consulted when roles = "identity"
//! ```
//!
//! On native targets the values are layered with the `config` crate: defaults,
//! then an optional `config.toml` in the working directory, then environment
//! variables split on `_` (`API_URL`, `AUTH_ROLES`, `AUTH_IDENTITY`). A `.env`
//! file is loaded first. In the browser the only override is `API_URL` baked in
//! at compile time.

use serde::Deserialize;
use tracing::warn;

use crate::auth::RoleSource;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_IDENTITY_PATH: &str = "/api/employees/me";

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiSettings {
    pub url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleSourceKind {
    Identity,
    Username,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthSettings {
    pub roles: RoleSourceKind,
    pub identity: String,
}

impl AuthSettings {
    pub fn role_source(&self) -> RoleSource {
        match self.roles {
            RoleSourceKind::Identity => RoleSource::Identity {
                path: self.identity.clone(),
            },
            RoleSourceKind::Username => RoleSource::UsernameRule,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    pub auth: AuthSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiSettings {
                url: DEFAULT_API_URL.to_string(),
            },
            auth: AuthSettings {
                roles: RoleSourceKind::Identity,
                identity: DEFAULT_IDENTITY_PATH.to_string(),
            },
        }
    }
}

impl Settings {
    /// Load settings for this platform, falling back to defaults on error.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::from_sources().unwrap_or_else(|error| {
                warn!(%error, "invalid configuration, using defaults");
                Self::default()
            })
        }
        #[cfg(target_arch = "wasm32")]
        {
            let mut settings = Self::default();
            if let Some(url) = option_env!("API_URL") {
                settings.api.url = url.to_string();
            }
            settings.normalized()
        }
    }

    /// Layer defaults, `config.toml` and the environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_sources() -> Result<Self, config::ConfigError> {
        use config::{Config, Environment, File, FileFormat};

        dotenvy::dotenv().ok();

        let config = Config::builder()
            .set_default("api.url", DEFAULT_API_URL)?
            .set_default("auth.roles", "identity")?
            .set_default("auth.identity", DEFAULT_IDENTITY_PATH)?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::default().separator("_"))
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        Ok(settings.normalized())
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api.url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            warn!("empty API url, using {DEFAULT_API_URL}");
            self.api.url = DEFAULT_API_URL.to_string();
        } else {
            self.api.url = trimmed.to_string();
        }
        self
    }
}
