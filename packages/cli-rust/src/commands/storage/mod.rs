//! Storage subcommand implementations
//!
//! Provides `gcpilot storage` subcommands for Cloud Storage buckets.

mod access;
mod create_bucket;
mod list;

use super::Context;
use anyhow::Result;
use clap::{Args, Subcommand};

pub use access::{cmd_storage_check_public, cmd_storage_make_private, cmd_storage_make_public};
pub use create_bucket::{CreateBucketArgs, cmd_storage_create_bucket};
pub use list::cmd_storage_list;

/// Storage command arguments
#[derive(Args, Debug)]
pub struct StorageArgs {
    #[command(subcommand)]
    pub command: StorageCommands,
}

/// Project and bucket selection shared by the access subcommands
#[derive(Args, Debug, Default)]
pub struct BucketTarget {
    /// GCP project ID
    #[arg(short, long)]
    pub project_id: Option<String>,
    /// Bucket name
    #[arg(short = 'n', long, short_alias = 'b', alias = "bucket")]
    pub bucket_name: Option<String>,
}

/// Storage subcommands
#[derive(Subcommand, Debug)]
pub enum StorageCommands {
    /// Create a new bucket
    CreateBucket(CreateBucketArgs),
    /// List buckets in a project
    List {
        /// GCP project ID
        #[arg(short, long)]
        project_id: Option<String>,
    },
    /// Grant public read access to a bucket
    ///
    /// Adds an allUsers objectViewer binding. Uniform bucket-level access is
    /// only switched on by create-bucket; a bucket with fine-grained ACLs
    /// keeps them.
    MakePublic(BucketTarget),
    /// Remove public read access from a bucket
    MakePrivate(BucketTarget),
    /// Check whether a bucket is publicly readable
    CheckPublic(BucketTarget),
}

/// Handle storage command
pub fn cmd_storage(args: StorageArgs, ctx: &Context<'_>) -> Result<()> {
    match args.command {
        StorageCommands::CreateBucket(args) => cmd_storage_create_bucket(args, ctx),
        StorageCommands::List { project_id } => cmd_storage_list(project_id, ctx),
        StorageCommands::MakePublic(target) => cmd_storage_make_public(target, ctx),
        StorageCommands::MakePrivate(target) => cmd_storage_make_private(target, ctx),
        StorageCommands::CheckPublic(target) => cmd_storage_check_public(target, ctx),
    }
}
