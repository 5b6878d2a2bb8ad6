//! Apply a partial update from a JSON request.

use anyhow::Result;
use storefront_catalog::catalog::UpdateCategoryRequest;
use storefront_catalog::store::CategoryStore;

use super::{read_request, UpdateArgs};
use crate::context::Context;

/// Run the update command.
pub async fn run(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let request: UpdateCategoryRequest = read_request(&ctx.cwd.join(&args.file)).await?;

    let store = ctx.load_store().await?;
    let updated = store.update(&request)?;

    if args.dry_run {
        ctx.output.warn("Dry run: dataset not saved");
    } else {
        ctx.save_store(&store).await?;
        ctx.output
            .success(&format!("Updated category {} ({})", updated.slug, updated.id));
    }

    ctx.output.category(&updated, ctx.config.listing.locale);
    Ok(())
}
