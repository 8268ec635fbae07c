//! Credential configuration for the Naver Open API.
//!
//! Goldpan needs two opaque values (a client id and a client secret) for the
//! credentialed search endpoints. They are carried in an explicit
//! [`Credentials`] value passed to the client constructors; there is no
//! process-global configuration state. Values resolve in priority order:
//! explicit CLI flags, environment variables (handled by clap), then the
//! JSON config file (`config/keyword_config.json`).
//!
//! A missing or unreadable config file is not an error; it just leaves the
//! credentials unconfigured, which credentialed calls detect via
//! [`Credentials::is_configured`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default location of the credential config file, relative to the working
/// directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/keyword_config.json";

/// Naver Open API credentials.
///
/// Field names in the JSON form stay compatible with the original config
/// file, so an existing `keyword_config.json` keeps working.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// API client id (`X-Naver-Client-Id` header).
    #[serde(rename = "NAVER_BLOG_CLIENT_ID", default)]
    pub client_id: String,

    /// API client secret (`X-Naver-Client-Secret` header).
    #[serde(rename = "NAVER_BLOG_CLIENT_SECRET", default)]
    pub client_secret: String,
}

impl Credentials {
    /// Create credentials from explicit values.
    pub fn new<S: Into<String>>(client_id: S, client_secret: S) -> Self {
        Credentials {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Check whether both credential values are present.
    ///
    /// Credentialed operations must check this before issuing any request;
    /// when it returns `false` they short-circuit to their safe defaults.
    pub fn is_configured(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }

    /// Load credentials from a JSON config file.
    ///
    /// A missing, unreadable, or malformed file yields unconfigured
    /// (empty) credentials rather than an error.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(credentials) => credentials,
                Err(e) => {
                    log::debug!("ignoring malformed config file {}: {e}", path.display());
                    Credentials::default()
                }
            },
            Err(e) => {
                log::debug!("no config file at {}: {e}", path.display());
                Credentials::default()
            }
        }
    }

    /// Resolve credentials from optional explicit values, falling back
    /// per-field to the config file at `path`.
    pub fn resolve(
        client_id: Option<String>,
        client_secret: Option<String>,
        path: &Path,
    ) -> Self {
        let from_file = Credentials::load(path);
        Credentials {
            client_id: client_id.unwrap_or(from_file.client_id),
            client_secret: client_secret.unwrap_or(from_file.client_secret),
        }
    }
}
