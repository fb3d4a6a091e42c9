//! quill configuration module
//!
//! Loads `quill.toml`, centralizes constants, and resolves the provider API
//! key whose presence decides between live and mock generation.

pub mod api_keys;
pub mod constants;
pub mod loader;

pub use api_keys::{ApiKeySources, load_dotenv, resolve_api_key};
pub use loader::{ConfigManager, QuillConfig};

use serde::{Deserialize, Serialize};

/// Generation provider settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Model identifier sent with every live request
    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Inline API key; environment variables take precedence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Provider API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key_env: default_api_key_env(),
            api_key: None,
            base_url: default_base_url(),
        }
    }
}

impl ProviderConfig {
    pub fn api_key_sources(&self) -> ApiKeySources {
        ApiKeySources::new(self.api_key_env.clone(), self.api_key.clone())
    }
}

fn default_model() -> String {
    constants::defaults::DEFAULT_MODEL.to_string()
}
fn default_api_key_env() -> String {
    constants::defaults::DEFAULT_API_KEY_ENV.to_string()
}
fn default_base_url() -> String {
    constants::defaults::DEFAULT_BASE_URL.to_string()
}

/// Terminal output settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Print the compiled prompt after the generated content
    #[serde(default)]
    pub show_prompt: bool,
}
