//! gcpilot CLI - guided workflows on top of the gcloud CLI
//!
//! This module contains the CLI implementation used by the binary, and the
//! [`dispatch`] entry point that tests drive with a recording runner.

mod commands;
pub mod output;
pub mod wizard;

pub use commands::Context;

use crate::output::{Display, Reported, format_config_error, format_gcloud_error, get_banner};
use crate::wizard::TerminalPrompter;
use anyhow::Result;
use clap::{Parser, Subcommand};
use gcpilot_core::config::{GCLOUD_ENV, resolve_gcloud_path};
use gcpilot_core::{GcloudCli, Interrupted, load_config_or_default};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Guided, menu-driven workflows for Google Cloud
#[derive(Parser, Debug)]
#[command(name = "gcpilot")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Guided, menu-driven workflows for Google Cloud", long_about = None)]
#[command(after_help = get_banner())]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the banner and spinners
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Path to the gcloud binary
    #[arg(long, global = true, value_name = "PATH")]
    pub gcloud: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authentication, accounts and the active project
    Auth(commands::AuthArgs),
    /// Create, inspect and delete projects
    Project(commands::ProjectArgs),
    /// Cloud Storage buckets
    Storage(commands::StorageArgs),
    /// Billing accounts and project billing
    Billing(commands::BillingArgs),
    /// IAM role bindings for users
    Iam(commands::IamArgs),
    /// Permissions of the active account
    Permissions(commands::PermissionsArgs),
    /// Organization policies on a project
    OrgPolicy(commands::OrgPolicyArgs),
    /// Show gcpilot configuration
    Config(commands::ConfigArgs),
}

impl Commands {
    /// Whether the command talks to gcloud at all
    fn needs_gcloud(&self) -> bool {
        !matches!(self, Commands::Config(_))
    }
}

/// Route a parsed command to its handler
pub fn dispatch(command: Commands, ctx: &Context<'_>) -> Result<()> {
    match command {
        Commands::Auth(args) => commands::cmd_auth(args, ctx),
        Commands::Project(args) => commands::cmd_project(args, ctx),
        Commands::Storage(args) => commands::cmd_storage(args, ctx),
        Commands::Billing(args) => commands::cmd_billing(args, ctx),
        Commands::Iam(args) => commands::cmd_iam(args, ctx),
        Commands::Permissions(args) => commands::cmd_permissions(args, ctx),
        Commands::OrgPolicy(args) => commands::cmd_org_policy(args, ctx),
        Commands::Config(args) => commands::cmd_config(args, ctx),
    }
}

/// Map a handler result to the process exit code
///
/// - interrupt: 0, nothing printed
/// - [`Reported`]: 1, the banner is already on screen
/// - anything else: error banner, 1
pub fn finish(result: Result<()>, display: &Display) -> i32 {
    let Err(err) = result else {
        return 0;
    };

    if err.downcast_ref::<Interrupted>().is_some() {
        debug!("Interrupted by user");
        return 0;
    }

    if err.downcast_ref::<Reported>().is_none() {
        display.error(&format!("{err:#}"));
    }
    1
}

/// Confirm the gcloud binary runs before any command touches it
pub fn precheck(gcloud: &GcloudCli, display: &Display) -> bool {
    match gcloud.version() {
        Ok(version) => {
            debug!("Using {version}");
            true
        }
        Err(e) => {
            display.error(&format_gcloud_error(&e));
            false
        }
    }
}

/// Run the CLI and return the process exit code
pub fn run() -> i32 {
    let cli = Cli::parse();

    // Configure color output
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    init_tracing(cli.verbose, cli.no_color);
    install_interrupt_handler();

    let display = Display::stdout();

    let config = match load_config_or_default() {
        Ok(config) => config,
        Err(e) => {
            display.error(&format_config_error(&e));
            return 1;
        }
    };

    if !cli.quiet && !cli.no_banner && config.show_banner {
        display.banner();
    }

    let env_gcloud = std::env::var(GCLOUD_ENV).ok();
    let gcloud = GcloudCli::new(resolve_gcloud_path(
        cli.gcloud.as_deref(),
        env_gcloud.as_deref(),
        &config,
    ));

    if cli.command.needs_gcloud() && !precheck(&gcloud, &display) {
        return 1;
    }

    let prompter = TerminalPrompter::default();
    let ctx = Context {
        gcloud: &gcloud,
        prompter: &prompter,
        display: &display,
        config: &config,
        quiet: cli.quiet,
    };
    finish(dispatch(cli.command, &ctx), &display)
}

/// Log level from `-v` count; `RUST_LOG` takes precedence when set
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8, no_color: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .init();
}

/// Ctrl+C outside a prompt (typically while gcloud owns the terminal)
/// ends the process quietly with exit code 0
fn install_interrupt_handler() {
    let installed = ctrlc::set_handler(|| {
        let _ = console::Term::stderr().show_cursor();
        eprintln!();
        eprintln!("Process interrupted by user");
        std::process::exit(0);
    });
    if let Err(e) = installed {
        debug!("Could not install Ctrl+C handler: {e}");
    }
}
