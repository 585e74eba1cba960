//! Output utilities for CLI commands
//!
//! Display rendering, spinners for fetches, color helpers and error
//! formatting.

pub mod banner;
pub mod colors;
pub mod display;
pub mod errors;
pub mod spinner;

pub use banner::get_banner;
pub use colors::{enabled_label, enforcement_label, status_style};
pub use display::{Display, MessageKind, SharedBuffer, render_message};
pub use errors::{Reported, format_config_error, format_gcloud_error, report};
pub use spinner::{CommandSpinner, with_spinner};
