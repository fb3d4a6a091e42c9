//! CLI argument parsing and configuration

use crate::config::QuillConfig;
use crate::content::{ContentRequest, ContentType, Tone};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueHint};
use std::fs;
use std::path::PathBuf;

/// Main CLI structure for quill
#[derive(Parser, Debug)]
#[command(
    name = "quill",
    version,
    about = "Generate marketing copy with Gemini\n\nWithout an API key quill runs in mock mode and returns labeled placeholder text.\n\nQuick Start:\n  export GEMINI_API_KEY=\"your_key\"\n  quill generate --topic \"eco bags\" --type social_media_update --tone humorous"
)]
pub struct Cli {
    /// Configuration file to load instead of searching the workspace
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Workspace root used to find quill.toml; defaults to the current directory
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::DirPath)]
    pub workspace: Option<PathBuf>,

    /// Model ID sent to the provider (overrides quill.toml)
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Environment variable holding the API key (overrides quill.toml)
    #[arg(long, global = true)]
    pub api_key_env: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate content for a request
    Generate {
        #[command(flatten)]
        request: RequestArgs,

        /// Print the compiled prompt after the content
        #[arg(long)]
        show_prompt: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the compiled prompt without generating
    Prompt {
        #[command(flatten)]
        request: RequestArgs,
    },

    /// List content types and tones
    Types,

    /// Write a sample quill.toml into the workspace
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration and generation mode
    Config,
}

/// Request fields, given inline or as a JSON file
#[derive(Args, Debug, Clone)]
pub struct RequestArgs {
    /// What the content is about
    #[arg(long, required_unless_present = "request")]
    pub topic: Option<String>,

    /// Content type: blog_post (default), social_media_update, email_draft, product_description
    #[arg(long = "type", value_name = "TYPE")]
    pub content_type: Option<ContentType>,

    /// Tone of voice (default: casual)
    #[arg(long, value_enum)]
    pub tone: Option<Tone>,

    /// Comma separated keywords to weave in
    #[arg(long)]
    pub keywords: Option<String>,

    /// JSON file holding a request ({"topic", "contentType", "tone", "keywords"})
    #[arg(
        long,
        value_name = "FILE",
        value_hint = ValueHint::FilePath,
        conflicts_with_all = ["topic", "content_type", "tone", "keywords"]
    )]
    pub request: Option<PathBuf>,
}

impl RequestArgs {
    /// Build the content request from flags or the JSON file
    pub fn to_request(&self) -> Result<ContentRequest> {
        if let Some(path) = &self.request {
            let payload = fs::read_to_string(path)
                .with_context(|| format!("Failed to read request file: {}", path.display()))?;
            return serde_json::from_str(&payload)
                .with_context(|| format!("Failed to parse request file: {}", path.display()));
        }

        Ok(ContentRequest {
            topic: self.topic.clone().unwrap_or_default(),
            content_type: self.content_type.clone().unwrap_or(ContentType::BlogPost),
            tone: self.tone,
            keywords: self.keywords.clone(),
        })
    }
}

impl Cli {
    /// Log filter directive implied by the flags
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug { "quill=debug,quill_core=debug" } else { "warn" }
    }

    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut QuillConfig) {
        if let Some(model) = &self.model {
            config.provider.model = model.clone();
        }
        if let Some(api_key_env) = &self.api_key_env {
            config.provider.api_key_env = api_key_env.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generate_flags() {
        let cli = Cli::try_parse_from([
            "quill",
            "generate",
            "--topic",
            "eco bags",
            "--type",
            "social_media_update",
            "--tone",
            "humorous",
            "--keywords",
            "sustainable,reusable",
        ])
        .unwrap();

        let Commands::Generate { request, .. } = cli.command else {
            panic!("expected generate command");
        };
        let request = request.to_request().unwrap();
        assert_eq!(request.topic, "eco bags");
        assert_eq!(request.content_type, ContentType::SocialMediaUpdate);
        assert_eq!(request.tone, Some(Tone::Humorous));
        assert_eq!(request.keywords.as_deref(), Some("sustainable,reusable"));
    }

    #[test]
    fn unknown_type_is_accepted() {
        let cli = Cli::try_parse_from(["quill", "prompt", "--topic", "x", "--type", "haiku"])
            .unwrap();
        let Commands::Prompt { request } = cli.command else {
            panic!("expected prompt command");
        };
        assert_eq!(
            request.to_request().unwrap().content_type,
            ContentType::Other("haiku".to_string())
        );
    }

    #[test]
    fn overrides_replace_configured_values() {
        let cli = Cli::try_parse_from([
            "quill",
            "--model",
            "gemini-2.5-pro",
            "--api-key-env",
            "MY_KEY",
            "types",
        ])
        .unwrap();
        let mut config = QuillConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.provider.model, "gemini-2.5-pro");
        assert_eq!(config.provider.api_key_env, "MY_KEY");
    }

    #[test]
    fn type_defaults_to_blog_post() {
        let cli = Cli::try_parse_from(["quill", "prompt", "--topic", "tea"]).unwrap();
        let Commands::Prompt { request } = cli.command else {
            panic!("expected prompt command");
        };
        assert_eq!(request.to_request().unwrap().content_type, ContentType::BlogPost);
    }

    #[test]
    fn request_file_conflicts_with_inline_type() {
        let result = Cli::try_parse_from([
            "quill",
            "generate",
            "--request",
            "request.json",
            "--type",
            "email_draft",
        ]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ArgumentConflict
        );
    }

    #[test]
    fn topic_is_required_without_request_file() {
        assert!(Cli::try_parse_from(["quill", "generate"]).is_err());
    }

    #[test]
    fn reads_request_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("request.json");
        fs::write(
            &path,
            r#"{"topic": "mugs", "contentType": "product_description", "tone": "formal"}"#,
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "quill",
            "generate",
            "--request",
            path.to_str().unwrap(),
        ])
        .unwrap();
        let Commands::Generate { request, .. } = cli.command else {
            panic!("expected generate command");
        };
        let request = request.to_request().unwrap();
        assert_eq!(request.content_type, ContentType::ProductDescription);
        assert_eq!(request.tone, Some(Tone::Formal));
    }
}
