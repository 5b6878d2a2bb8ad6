//! Show a single category.

use anyhow::Result;
use storefront_catalog::catalog::Locale;
use storefront_catalog::store::CategoryStore;
use storefront_catalog::{CatalogError, CategoryId};

use super::ShowArgs;
use crate::context::Context;

/// Run the show command. The key is tried as an id, then as a slug.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let locale = match args.locale.as_deref() {
        Some(l) => l.parse::<Locale>()?,
        None => ctx.config.listing.locale,
    };

    let store = ctx.load_store().await?;
    let category = store
        .find_by_id(&CategoryId::new(args.key.as_str()))
        .or_else(|| store.find_by_slug(&args.key))
        .ok_or(CatalogError::NotFound { id: args.key })?;

    ctx.output.category(&category, locale);
    Ok(())
}
