use crate::domain::{Language, LanguageVersions};
use crate::error::Result;

/// Render the calculated versions for stdout: one ecosystem string, or all
/// five as a JSON object.
pub fn render(versions: &LanguageVersions, language: Language, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(versions)?);
    }

    Ok(versions.get(language).to_string())
}

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_warning(message: &str) {
    eprintln!("\x1b[33mWARNING:\x1b[0m {}", message); // Yellow color
}
