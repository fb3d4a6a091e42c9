//! Styled provider notices for the terminal frontend
//!
//! Each notice is the provider or mode name, colored by provider, followed by
//! the message in red (errors) or yellow (warnings).

use console::style;

fn style_provider_name(provider: &str) -> String {
    let styled_name = match provider.to_lowercase().as_str() {
        "gemini" | "live" => style(provider).blue(),
        "mock" => style(provider).magenta(),
        _ => style(provider).cyan(),
    };
    styled_name.to_string()
}

/// Failure notice, e.g. the generic generation error
pub fn format_llm_error(provider: &str, error: &str) -> String {
    format!("{} {}", style_provider_name(provider), style(error).red())
}

/// Non-fatal notice, e.g. falling back to mock mode
pub fn format_llm_warning(provider: &str, warning: &str) -> String {
    format!("{} {}", style_provider_name(provider), style(warning).yellow())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_keep_provider_and_text() {
        console::set_colors_enabled(false);
        assert_eq!(format_llm_error("live", "boom"), "live boom");
        assert_eq!(format_llm_warning("mock", "no key"), "mock no key");
    }
}
