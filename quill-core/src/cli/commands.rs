//! Command handlers for the quill binary

use crate::config::constants::model_helpers;
use crate::config::{ConfigManager, QuillConfig, resolve_api_key};
use crate::content::{ContentRequest, ContentType, GenerationResult, Tone};
use crate::generation::{Dispatcher, GenerationMode, SubmitOutcome};
use crate::llm::error_display;
use crate::prompts;
use crate::ui::TerminalSink;
use anyhow::{Context, Result};
use console::{Term, style};
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

#[derive(Serialize)]
struct JsonOutput<'a> {
    mode: GenerationMode,
    #[serde(flatten)]
    result: &'a GenerationResult,
}

/// Generate content and print it.
///
/// A provider failure prints the generic error message and exits non-zero.
pub async fn handle_generate(
    config: &QuillConfig,
    request: &ContentRequest,
    show_prompt: bool,
    json: bool,
) -> Result<ExitCode> {
    request.validate().context("Invalid content request")?;

    let dispatcher = Dispatcher::from_config(config);
    if dispatcher.mode() == GenerationMode::Mock && !json {
        eprintln!(
            "{}",
            error_display::format_llm_warning(
                "mock",
                &format!(
                    "{} not set, showing placeholder content",
                    config.provider.api_key_env
                ),
            )
        );
    }

    let interactive = !json && Term::stderr().is_term();
    let mut sink = TerminalSink::new(
        format!("Generating {}...", request.content_type.label()),
        interactive,
    );

    match dispatcher.submit(request, &mut sink).await {
        SubmitOutcome::Completed(result) => {
            if json {
                let output = JsonOutput {
                    mode: dispatcher.mode(),
                    result: &result,
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .context("Failed to serialize generation result")?
                );
            } else {
                println!("{}", sink.output());
                if show_prompt || config.output.show_prompt {
                    println!();
                    println!(
                        "{} {}",
                        style("Prompt:").dim().bold(),
                        style(&result.prompt_used).dim()
                    );
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        SubmitOutcome::Failed => {
            eprintln!(
                "{}",
                error_display::format_llm_error(&dispatcher.mode().to_string(), sink.output())
            );
            Ok(ExitCode::FAILURE)
        }
        SubmitOutcome::Skipped => Ok(ExitCode::SUCCESS),
    }
}

/// Print the compiled prompt only
pub fn handle_prompt(request: &ContentRequest) -> Result<ExitCode> {
    request.validate().context("Invalid content request")?;
    println!("{}", prompts::compile(request));
    Ok(ExitCode::SUCCESS)
}

/// List content types and tones
pub fn handle_types() -> Result<ExitCode> {
    println!("{}", style("Content types").cyan().bold());
    for content_type in ContentType::ALL {
        println!(
            "  {:<22} {}",
            style(content_type.as_str()).bold(),
            content_type.label()
        );
        if let Some(instruction) = prompts::authoring_instruction(&content_type) {
            println!("  {:<22} {}", "", style(instruction).dim());
        }
    }

    println!();
    println!("{}", style("Tones").cyan().bold());
    for tone in Tone::ALL {
        let marker = if tone == Tone::default() { " (default)" } else { "" };
        println!("  {:<22} {}{}", style(tone.as_str()).bold(), tone.label(), marker);
    }
    Ok(ExitCode::SUCCESS)
}

/// Write a sample quill.toml into `workspace`
pub fn handle_init(workspace: &Path, force: bool) -> Result<ExitCode> {
    match QuillConfig::bootstrap_project(workspace, force)? {
        Some(path) => println!(
            "{} {}",
            style("Created").green().bold(),
            path.display()
        ),
        None => println!(
            "{} quill.toml already exists (use --force to overwrite)",
            style("Skipped").yellow().bold()
        ),
    }
    Ok(ExitCode::SUCCESS)
}

/// Show the effective configuration and which generation mode it selects
pub fn handle_config(manager: &ConfigManager) -> Result<ExitCode> {
    let config = manager.config();
    let provider = &config.provider;
    let mode = if resolve_api_key(&provider.api_key_sources()).is_some() {
        GenerationMode::Live
    } else {
        GenerationMode::Mock
    };

    let source = manager
        .config_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());

    println!("{:<12} {}", style("config").bold(), source);
    println!("{:<12} {}", style("model").bold(), provider.model);
    println!("{:<12} {}", style("api key env").bold(), provider.api_key_env);
    println!("{:<12} {}", style("base url").bold(), provider.base_url);
    println!("{:<12} {}", style("mode").bold(), mode);

    if !model_helpers::is_known(&provider.model) {
        eprintln!(
            "{}",
            error_display::format_llm_warning(
                "gemini",
                &format!("model '{}' is not in the known model list", provider.model),
            )
        );
    }
    Ok(ExitCode::SUCCESS)
}
