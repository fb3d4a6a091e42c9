/// Model ID constants
pub mod models {
    // Google/Gemini models
    pub mod google {
        pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
        pub const SUPPORTED_MODELS: &[&str] = &[
            "gemini-2.5-flash",
            "gemini-2.5-pro",
            "gemini-2.5-flash-lite",
            "gemini-2.5-flash-preview-05-20",
        ];
    }
}

/// Provider endpoints
pub mod urls {
    pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
}

/// Fixed generation parameters
pub mod generation {
    /// Sampling temperature sent with every live request
    pub const TEMPERATURE: f32 = 0.7;

    /// The single failure message shown to interactive callers
    pub const GENERIC_ERROR_MESSAGE: &str = "Error generating content. Please try again.";
}

/// Default configuration values
pub mod defaults {
    use super::{models, urls};

    pub const DEFAULT_MODEL: &str = models::google::DEFAULT_MODEL;
    pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
    /// Checked after the configured variable for compatibility with Google tooling
    pub const FALLBACK_API_KEY_ENV: &str = "GOOGLE_API_KEY";
    pub const DEFAULT_BASE_URL: &str = urls::GEMINI_API_BASE;
    pub const CONFIG_FILE_NAME: &str = "quill.toml";
    pub const CONFIG_DIR_NAME: &str = ".quill";
}

/// Model validation helpers
pub mod model_helpers {
    use super::models;

    /// Whether `model` is one of the known Gemini model ids
    pub fn is_known(model: &str) -> bool {
        models::google::SUPPORTED_MODELS.contains(&model)
    }
}
