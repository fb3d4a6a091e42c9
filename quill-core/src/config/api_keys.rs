//! API key retrieval from environment variables, .env files, and the
//! configuration file.
//!
//! A missing key is not an error here: it is the signal that selects mock
//! generation.

use crate::config::constants::defaults;
use std::env;
use tracing::{debug, warn};

/// Where to look for the Gemini API key
#[derive(Debug, Clone)]
pub struct ApiKeySources {
    /// Primary environment variable name
    pub gemini_env: String,
    /// Key from the configuration file
    pub gemini_config: Option<String>,
}

impl Default for ApiKeySources {
    fn default() -> Self {
        Self {
            gemini_env: defaults::DEFAULT_API_KEY_ENV.to_string(),
            gemini_config: None,
        }
    }
}

impl ApiKeySources {
    pub fn new(gemini_env: impl Into<String>, gemini_config: Option<String>) -> Self {
        Self {
            gemini_env: gemini_env.into(),
            gemini_config,
        }
    }
}

/// Load environment variables from a .env file in the current directory.
///
/// A missing file is fine; an unreadable one is logged and ignored.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!(path = %path.display(), "loaded environment variables from .env");
        }
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            warn!(error = %e, "failed to load .env file");
        }
    }
}

/// Resolve the Gemini API key.
///
/// Order: the configured environment variable, then `GOOGLE_API_KEY`, then the
/// configuration file value. Empty values count as absent.
pub fn resolve_api_key(sources: &ApiKeySources) -> Option<String> {
    let from_env = |name: &str| env::var(name).ok().filter(|key| !key.is_empty());

    from_env(&sources.gemini_env)
        .or_else(|| from_env(defaults::FALLBACK_API_KEY_ENV))
        .or_else(|| {
            sources
                .gemini_config
                .as_ref()
                .filter(|key| !key.is_empty())
                .cloned()
        })
}
