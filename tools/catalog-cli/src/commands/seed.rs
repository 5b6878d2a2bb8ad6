//! Write the seed dataset to disk.

use anyhow::{bail, Result};
use storefront_catalog::seed::seed_categories;

use super::SeedArgs;
use crate::context::{write_dataset, Context};

/// Run the seed command.
pub async fn run(args: SeedArgs, ctx: &Context) -> Result<()> {
    let path = ctx.data_path();
    if path.exists() && !args.force {
        bail!(
            "Dataset already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    write_dataset(&path, seed_categories()).await?;

    if ctx.output.is_json() {
        ctx.output.json(&seed_categories());
    }
    ctx.output.success(&format!(
        "Wrote {} seed categories to {}",
        seed_categories().len(),
        path.display()
    ));
    Ok(())
}
