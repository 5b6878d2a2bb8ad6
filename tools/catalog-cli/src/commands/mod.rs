//! CLI command implementations.

pub mod counts;
pub mod create;
pub mod deactivate;
pub mod init;
pub mod list;
pub mod seed;
pub mod show;
pub mod update;
pub mod validate;

use std::path::Path;

use anyhow::{Context as _, Result};
use clap::Args;
use serde::de::DeserializeOwned;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Include inactive categories.
    #[arg(short, long)]
    pub all: bool,

    /// Text search over slug and localized names.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order: position, name, name-desc, newest, oldest, most-products.
    #[arg(long, default_value = "position")]
    pub sort: String,

    /// Page number (1-indexed).
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Items per page (default from config).
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Display locale: vi, en, ja (default from config).
    #[arg(short, long)]
    pub locale: Option<String>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Category id or slug.
    pub key: String,

    /// Display locale: vi, en, ja.
    #[arg(short, long)]
    pub locale: Option<String>,
}

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// JSON file holding a create request.
    pub file: String,

    /// Validate and print the result without saving.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// JSON file holding an update request.
    pub file: String,

    /// Validate and print the result without saving.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the deactivate command.
#[derive(Args)]
pub struct DeactivateArgs {
    /// Category id.
    pub id: String,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Dataset file to check (default: the configured dataset).
    pub file: Option<String>,
}

/// Arguments for the counts command.
#[derive(Args)]
pub struct CountsArgs {
    /// Rewrite stale product counts and save.
    #[arg(long)]
    pub fix: bool,
}

/// Arguments for the seed command.
#[derive(Args)]
pub struct SeedArgs {
    /// Overwrite an existing dataset.
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the init command.
#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing catalog.toml.
    #[arg(short, long)]
    pub force: bool,
}

/// Read a JSON request body from a file.
pub(crate) async fn read_request<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read request: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse request: {}", path.display()))
}
