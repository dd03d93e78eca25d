//! Environment-driven server configuration.

use std::env;
use std::path::PathBuf;

use crate::error::{Result, SiteError};

/// Fallback signing secret for local development. Long enough for key
/// derivation, useless for anything deployed.
const DEV_SESSION_SECRET: &str = "dev-vault-insecure-development-secret";

/// Server configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Interface to bind, `SITE_HOST` (default `127.0.0.1`).
    pub host: String,
    /// Port to bind, `SITE_PORT` (default `3000`).
    pub port: u16,
    /// Cookie signing secret, `SESSION_SECRET` (at least 32 bytes).
    pub session_secret: String,
    /// Whether this is a production deployment, `SITE_ENV=production`.
    /// Controls the `Secure` attribute on session cookies.
    pub production: bool,
    /// Optional directory of static assets, `SITE_STATIC_DIR`.
    pub static_dir: Option<PathBuf>,
}

impl SiteConfig {
    /// Reads configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let host = env::var("SITE_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let port = match env::var("SITE_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|err| SiteError::Config(format!("invalid SITE_PORT: {err}")))?,
            Err(_) => 3000,
        };
        let production = env::var("SITE_ENV")
            .map(|value| value == "production")
            .unwrap_or(false);
        let session_secret = match env::var("SESSION_SECRET") {
            Ok(secret) => {
                if secret.len() < 32 {
                    return Err(SiteError::Config(
                        "SESSION_SECRET must be at least 32 bytes".to_owned(),
                    ));
                }
                secret
            }
            Err(_) => {
                if production {
                    return Err(SiteError::Config(
                        "SESSION_SECRET is required in production".to_owned(),
                    ));
                }
                tracing::warn!("SESSION_SECRET not set; using the development secret");
                DEV_SESSION_SECRET.to_owned()
            }
        };
        let static_dir = env::var_os("SITE_STATIC_DIR").map(PathBuf::from);

        Ok(Self {
            host,
            port,
            session_secret,
            production,
            static_dir,
        })
    }

    /// In-process configuration with the development secret, used by tests.
    pub fn development() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3000,
            session_secret: DEV_SESSION_SECRET.to_owned(),
            production: false,
            static_dir: None,
        }
    }
}
