//! Soft-deactivate a category.

use anyhow::Result;
use dialoguer::Confirm;
use storefront_catalog::store::CategoryStore;
use storefront_catalog::{CatalogError, CategoryId};

use super::DeactivateArgs;
use crate::context::Context;

/// Run the deactivate command.
pub async fn run(args: DeactivateArgs, ctx: &Context) -> Result<()> {
    let id = CategoryId::new(args.id);
    let store = ctx.load_store().await?;

    let current = store
        .find_by_id(&id)
        .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })?;

    if !current.is_active {
        ctx.output
            .info(&format!("Category {} is already inactive", current.slug));
        return Ok(());
    }

    if !args.yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Hide '{}' ({}) from public listings?",
                current.name, current.slug
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Deactivation cancelled");
            return Ok(());
        }
    }

    let updated = store.deactivate(&id)?;
    ctx.save_store(&store).await?;

    if ctx.output.is_json() {
        ctx.output.json(&updated);
    } else {
        ctx.output.success(&format!(
            "Category {} is now inactive; it stays in the dataset",
            updated.slug
        ));
    }
    Ok(())
}
