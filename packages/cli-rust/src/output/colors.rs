//! Color utilities for CLI output
//!
//! Provides consistent styling for status values shown in tables.

use console::{Style, StyledObject};

/// Style a status value with appropriate colors
///
/// - "enabled", "enforced", "granted", "active", "yes" -> green bold
/// - "disabled", "denied", "not enforced", "no" -> red
/// - "delete_requested", "pending" -> yellow
/// - other -> unstyled
pub fn status_style(value: &str) -> StyledObject<String> {
    let lowercase = value.to_lowercase();
    let style = match lowercase.as_str() {
        "enabled" | "enforced" | "granted" | "active" | "yes" | "authenticated" => {
            Style::new().green().bold()
        }
        "disabled" | "denied" | "not enforced" | "no" => Style::new().red(),
        "delete_requested" | "pending" => Style::new().yellow(),
        _ => Style::new(),
    };
    style.apply_to(value.to_string())
}

/// Label for a boolean toggle
pub fn enabled_label(enabled: bool) -> &'static str {
    if enabled { "Enabled" } else { "Disabled" }
}

/// Label for an org-policy enforcement flag
pub fn enforcement_label(enforced: Option<bool>) -> &'static str {
    match enforced {
        Some(true) => "Enforced",
        Some(false) => "Not Enforced",
        None => "List Policy",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_style_keeps_text() {
        assert_eq!(status_style("Enabled").to_string(), "Enabled");
        assert_eq!(status_style("Denied").to_string(), "Denied");
        assert_eq!(status_style("ACTIVE").to_string(), "ACTIVE");
        assert_eq!(status_style("whatever").to_string(), "whatever");
    }

    #[test]
    fn labels() {
        assert_eq!(enabled_label(true), "Enabled");
        assert_eq!(enabled_label(false), "Disabled");
        assert_eq!(enforcement_label(Some(true)), "Enforced");
        assert_eq!(enforcement_label(Some(false)), "Not Enforced");
        assert_eq!(enforcement_label(None), "List Policy");
    }
}
