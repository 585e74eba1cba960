//! Storage create-bucket subcommand
//!
//! Steps:
//! 1. Resolve project, bucket name, location and storage class
//! 2. Ask whether the bucket should be public unless `--public` was given
//! 3. Gate on the cost warning
//! 4. Create the bucket, then bind public read access when requested

use crate::commands::Context;
use crate::output::enabled_label;
use crate::wizard::params;
use anyhow::Result;
use clap::Args;
use gcpilot_core::services::BucketOptions;
use gcpilot_core::workflows::StorageWorkflow;

/// Arguments for `storage create-bucket`
#[derive(Args, Debug, Default)]
pub struct CreateBucketArgs {
    /// GCP project ID
    #[arg(short, long)]
    pub project_id: Option<String>,
    /// Bucket name
    #[arg(short = 'n', long)]
    pub bucket_name: Option<String>,
    /// Bucket location, e.g. us-central1
    #[arg(short, long)]
    pub location: Option<String>,
    /// Default storage class
    #[arg(short, long)]
    pub storage_class: Option<String>,
    /// Make the bucket publicly readable
    #[arg(long)]
    pub public: bool,
}

pub fn cmd_storage_create_bucket(args: CreateBucketArgs, ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("Create New Bucket");

    let project_id = ctx.project(args.project_id)?;
    let name = ctx.resolve(args.bucket_name, params::bucket_name_input())?;
    let location = ctx.resolve(
        args.location,
        params::location(&ctx.config.bucket_locations),
    )?;
    let storage_class = ctx.resolve(args.storage_class, params::storage_class())?;

    let public = if args.public {
        true
    } else {
        ctx.display.warning("Making a bucket public can expose sensitive data");
        ctx.resolver().ask("Make bucket public?", false)?
    };

    if !ctx.proceed("Creating a bucket may incur costs")? {
        return Ok(());
    }

    let options = BucketOptions {
        project_id: project_id.clone(),
        location: Some(location.clone()),
        storage_class: Some(storage_class.clone()),
        public,
    };
    if !StorageWorkflow::new(ctx.gcloud).create_bucket(&name, &options)? {
        return Err(ctx.fail("Failed to create bucket"));
    }

    ctx.display.success(&format!("Successfully created bucket \"{name}\""));
    ctx.display.section("Bucket Details");
    ctx.display.properties(&[
        ("Name", name),
        ("Project", project_id),
        ("Location", location),
        ("Storage Class", storage_class),
        ("Public Access", enabled_label(public).to_string()),
    ]);
    Ok(())
}
