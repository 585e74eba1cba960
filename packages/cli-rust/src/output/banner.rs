//! Banner shown before commands and in `--help`

use console::style;
use gcpilot_core::get_version;

/// ASCII banner for help display
pub fn get_banner() -> &'static str {
    r#"
                   _ _       _
  __ _  ___ _ __ (_) | ___ | |_
 / _` |/ __| '_ \| | |/ _ \| __|
| (_| | (__| |_) | | | (_) | |_
 \__, |\___| .__/|_|_|\___/ \__|
 |___/     |_|
"#
}

/// Banner plus version line
pub fn render_banner() -> String {
    format!(
        "{}\n  {} {}\n",
        style(get_banner()).cyan(),
        style("gcpilot").cyan().bold(),
        style(format!("v{}", get_version())).dim()
    )
}
