//! Public access toggles and the access check

use super::BucketTarget;
use crate::commands::Context;
use crate::wizard::params;
use anyhow::Result;
use gcpilot_core::workflows::StorageWorkflow;

/// Project and bucket, prompting for whichever was not supplied
fn resolve_target(target: BucketTarget, ctx: &Context<'_>) -> Result<(String, String)> {
    let project_id = ctx.project(target.project_id)?;
    let bucket = ctx.resolve(target.bucket_name, params::bucket(ctx.gcloud, &project_id))?;
    Ok((project_id, bucket))
}

pub fn cmd_storage_make_public(target: BucketTarget, ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("Make Bucket Public");
    let (project_id, bucket) = resolve_target(target, ctx)?;

    if !ctx.proceed(&format!(
        "You are about to make bucket \"{bucket}\" publicly accessible"
    ))? {
        return Ok(());
    }

    if !StorageWorkflow::new(ctx.gcloud).make_public(&bucket, &project_id)? {
        return Err(ctx.fail("Failed to make bucket public"));
    }
    ctx.display.success(&format!("Bucket \"{bucket}\" is now publicly accessible"));
    Ok(())
}

pub fn cmd_storage_make_private(target: BucketTarget, ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("Make Bucket Private");
    let (project_id, bucket) = resolve_target(target, ctx)?;

    if !ctx.proceed(&format!(
        "You are about to remove public access from bucket \"{bucket}\""
    ))? {
        return Ok(());
    }

    if !StorageWorkflow::new(ctx.gcloud).make_private(&bucket, &project_id)? {
        return Err(ctx.fail("Failed to make bucket private"));
    }
    ctx.display.success(&format!("Bucket \"{bucket}\" is now private"));
    Ok(())
}

pub fn cmd_storage_check_public(target: BucketTarget, ctx: &Context<'_>) -> Result<()> {
    ctx.display.title("Check Bucket Access");
    let (project_id, bucket) = resolve_target(target, ctx)?;

    let storage = StorageWorkflow::new(ctx.gcloud);
    let public = ctx.fetch("Checking bucket access...", || {
        storage.is_public(&project_id, &bucket)
    })?;

    ctx.display.section(&format!("Access Status for \"{bucket}\""));
    if public {
        ctx.display.warning(&format!("Bucket \"{bucket}\" is publicly accessible"));
    } else {
        ctx.display.success(&format!("Bucket \"{bucket}\" is private"));
    }
    Ok(())
}
