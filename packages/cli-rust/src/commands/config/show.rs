//! Config show subcommand
//!
//! Displays current configuration in table or JSON format.
//! Uses serde serialization to automatically include all Config fields.

use crate::commands::Context;
use anyhow::{Context as _, Result, bail};
use gcpilot_core::{CommandRunner as _, Config, config};
use serde_json::Value;

/// Show current configuration
pub fn cmd_config_show(ctx: &Context<'_>, json: bool) -> Result<()> {
    if json {
        ctx.display.line(serde_json::to_string_pretty(ctx.config)?);
        return Ok(());
    }

    let rows = config_rows(ctx.config)?;
    ctx.display.table(&["Key", "Value"], rows);

    // --gcloud and GCPILOT_GCLOUD take precedence over gcloud_path
    ctx.display.blank();
    ctx.display
        .line(format!("Effective gcloud: {}", ctx.gcloud.program().display()));

    if let Some(path) = config::get_config_path() {
        ctx.display.line(format!("Config file: {}", path.display()));
    }
    Ok(())
}

fn config_rows(config: &Config) -> Result<Vec<Vec<String>>> {
    let Value::Object(obj) = serde_json::to_value(config).context("Failed to serialize config")?
    else {
        bail!("Config did not serialize to an object");
    };
    Ok(obj
        .iter()
        .map(|(key, value)| vec![key.clone(), format_value(value)])
        .collect())
}

/// Format a JSON value for display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "(not set)".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.is_empty() => "(not set)".to_string(),
        Value::String(s) => s.clone(),
        Value::Array(arr) => format_array(arr),
        Value::Object(_) => value.to_string(),
    }
}

fn format_array(arr: &[Value]) -> String {
    if arr.is_empty() {
        return "(none)".to_string();
    }

    arr.iter()
        .filter_map(|v| v.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_formats_arrays() {
        let val = Value::Array(vec![
            Value::String("us-central1".to_string()),
            Value::String("europe-west1".to_string()),
        ]);
        assert_eq!(format_value(&val), "us-central1, europe-west1");
    }

    #[test]
    fn test_format_value_shows_none_for_empty_array() {
        assert_eq!(format_value(&Value::Array(vec![])), "(none)");
    }

    #[test]
    fn test_format_value_shows_not_set_for_empty_string() {
        assert_eq!(format_value(&Value::String(String::new())), "(not set)");
        assert_eq!(format_value(&Value::String("gcloud".into())), "gcloud");
    }

    #[test]
    fn test_config_rows_cover_every_field() {
        let rows = config_rows(&Config::default()).unwrap();
        let keys: Vec<&str> = rows.iter().map(|row| row[0].as_str()).collect();

        assert!(keys.contains(&"gcloud_path"));
        assert!(keys.contains(&"bucket_locations"));
        assert!(keys.contains(&"show_banner"));
    }
}
