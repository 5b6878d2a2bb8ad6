//! Check product counts against the product list.

use anyhow::{bail, Result};
use storefront_catalog::catalog::stale_product_counts;
use storefront_catalog::store::CategoryStore;

use super::CountsArgs;
use crate::context::Context;

/// Run the counts command.
pub async fn run(args: CountsArgs, ctx: &Context) -> Result<()> {
    let store = ctx.load_store().await?;
    let products = ctx.load_products().await?;
    let drift = stale_product_counts(&store.list_all(), &products);

    if ctx.output.is_json() && !args.fix {
        ctx.output.json(&drift);
    }

    if drift.is_empty() {
        ctx.output.success(&format!(
            "Product counts match {} product(s)",
            products.len()
        ));
        return Ok(());
    }

    ctx.output.header("Stale product counts");
    for d in &drift {
        ctx.output.list_item(&format!(
            "{} ({}): cached {}, actual {}",
            d.slug, d.id, d.cached, d.actual
        ));
    }

    if !args.fix {
        bail!(
            "{} category count(s) out of date; rerun with --fix",
            drift.len()
        );
    }

    store.refresh_product_counts(&products);
    ctx.save_store(&store).await?;
    if ctx.output.is_json() {
        ctx.output.json(&store.list_all());
    }
    ctx.output
        .success(&format!("Rewrote {} product count(s)", drift.len()));
    Ok(())
}
