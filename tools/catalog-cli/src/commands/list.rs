//! List categories.

use anyhow::{anyhow, Result};
use storefront_catalog::catalog::Locale;
use storefront_catalog::search::{CategoryQuery, CategorySort};
use storefront_catalog::store::CategoryStore;

use super::ListArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let listing = &ctx.config.listing;
    let locale = match args.locale.as_deref() {
        Some(l) => l.parse::<Locale>()?,
        None => listing.locale,
    };
    let sort = CategorySort::from_str(&args.sort)
        .ok_or_else(|| anyhow!("Unknown sort order '{}'", args.sort))?;

    let mut query = CategoryQuery::new()
        .with_sort(sort)
        .with_locale(locale)
        .with_pagination(args.page, args.per_page.unwrap_or(listing.per_page));
    if let Some(text) = args.search {
        query = query.with_text(text);
    }
    if args.all || listing.include_inactive {
        query = query.including_inactive();
    }

    let store = ctx.load_store().await?;
    let page = store.list(&query);

    if ctx.output.is_json() {
        ctx.output.json(&page);
        return Ok(());
    }

    if page.is_empty() {
        ctx.output.info("No categories found.");
        return Ok(());
    }

    ctx.output.header(&format!("Categories ({})", sort.display_name()));
    let widths = [6, 16, 24, 10, 8];
    ctx.output
        .table_row(&["ID", "SLUG", "NAME", "STATUS", "PRODUCTS"], &widths);
    for cat in &page.items {
        let count = cat
            .product_count
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        ctx.output.table_row(
            &[
                cat.id.as_str(),
                &cat.slug,
                cat.localized_name(locale),
                &status_badge(cat.is_active),
                &count,
            ],
            &widths,
        );
    }

    let p = page.pagination;
    ctx.output.info(&format!(
        "Showing {}-{} of {} (page {}/{})",
        p.start_item(),
        p.end_item(),
        p.total,
        p.page,
        p.total_pages
    ));
    if p.has_next {
        ctx.output.debug(&format!("Next page: --page {}", p.page + 1));
    }

    Ok(())
}
