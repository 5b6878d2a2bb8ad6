//! Create a category from a JSON request.

use anyhow::Result;
use storefront_catalog::catalog::CreateCategoryRequest;
use storefront_catalog::store::CategoryStore;

use super::{read_request, CreateArgs};
use crate::context::Context;

/// Run the create command.
pub async fn run(args: CreateArgs, ctx: &Context) -> Result<()> {
    let request: CreateCategoryRequest = read_request(&ctx.cwd.join(&args.file)).await?;
    ctx.output
        .debug(&format!("Creating '{}' ({})", request.name, request.slug));

    let store = ctx.load_store().await?;
    let created = store.create(request)?;

    if args.dry_run {
        ctx.output.warn("Dry run: dataset not saved");
    } else {
        ctx.save_store(&store).await?;
        ctx.output.success(&format!(
            "Created category {} ({})",
            created.slug, created.id
        ));
    }

    ctx.output.category(&created, ctx.config.listing.locale);
    Ok(())
}
