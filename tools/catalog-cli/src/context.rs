//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use serde_json::Value;
use storefront_catalog::catalog::{validate_record, Category, ProductSummary};
use storefront_catalog::seed::seed_products;
use storefront_catalog::store::{CategoryStore, MemoryCategoryStore};
use storefront_catalog::CatalogError;
use tracing::{debug, info};

use crate::config::{CatalogConfig, CONFIG_NAMES};
use crate::output::Output;

/// Overrides `data.path` from the config file.
pub const DATA_ENV: &str = "CATALOG_DATA";

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CatalogConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Directory relative paths in the config resolve against.
    pub base_dir: PathBuf,
    /// Dataset path taken from `CATALOG_DATA`, if set.
    pub data_override: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, base_dir) = if let Some(path) = config_path {
            let base = Path::new(path)
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(|p| cwd.join(p))
                .unwrap_or_else(|| cwd.clone());
            (CatalogConfig::load(path)?, base)
        } else {
            Self::find_config(&cwd).unwrap_or_else(|| (CatalogConfig::default(), cwd.clone()))
        };

        let data_override = std::env::var(DATA_ENV)
            .ok()
            .filter(|path| !path.is_empty())
            .map(|path| cwd.join(path));

        debug!(base_dir = %base_dir.display(), data = %config.data.path, "loaded config");
        Ok(Self {
            config,
            output,
            cwd,
            base_dir,
            data_override,
        })
    }

    /// Find a config file in the directory tree, returning it with its directory.
    fn find_config(start: &Path) -> Option<(CatalogConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CatalogConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some((config, current)),
                        Err(e) => debug!(path = %config_path.display(), error = %e, "skipping config"),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the config directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.base_dir.join(path)
        }
    }

    /// The dataset file, honoring `CATALOG_DATA`.
    pub fn data_path(&self) -> PathBuf {
        match &self.data_override {
            Some(path) => path.clone(),
            None => self.resolve_path(&self.config.data.path),
        }
    }

    /// Load the dataset into a store, falling back to the seed when allowed.
    pub async fn load_store(&self) -> Result<MemoryCategoryStore> {
        let path = self.data_path();
        if !path.exists() {
            if self.config.data.seed_if_missing {
                info!(path = %path.display(), "dataset missing, starting from seed");
                return Ok(MemoryCategoryStore::from_seed());
            }
            bail!("Dataset not found: {}", path.display());
        }

        let categories = read_dataset(&path).await?;
        MemoryCategoryStore::from_categories(categories)
            .with_context(|| format!("Dataset {} is inconsistent", path.display()))
    }

    /// Write the store back to the dataset file.
    pub async fn save_store(&self, store: &MemoryCategoryStore) -> Result<()> {
        write_dataset(&self.data_path(), &store.list_all()).await
    }

    /// The product list used for count checks.
    pub async fn load_products(&self) -> Result<Vec<ProductSummary>> {
        let Some(path) = self.config.data.products_path.as_deref() else {
            return Ok(seed_products().to_vec());
        };
        let path = self.resolve_path(path);
        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read products: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse products: {}", path.display()))
    }
}

/// Parse and validate a JSON array of category records.
pub fn parse_dataset(content: &str) -> Result<Vec<Category>> {
    let records: Vec<Value> =
        serde_json::from_str(content).context("Dataset must be a JSON array")?;

    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            validate_record(record)
                .map_err(CatalogError::from)
                .with_context(|| format!("Record {} is invalid", i))
        })
        .collect()
}

/// Read and validate a dataset file.
pub async fn read_dataset(path: &Path) -> Result<Vec<Category>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read dataset: {}", path.display()))?;
    parse_dataset(&content).with_context(|| format!("In {}", path.display()))
}

/// Write a dataset file, replacing the old one only once the new one is complete.
pub async fn write_dataset(path: &Path, categories: &[Category]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let content = serde_json::to_string_pretty(categories)?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, content)
        .await
        .with_context(|| format!("Failed to write {}", tmp.display()))?;
    tokio::fs::rename(&tmp, path)
        .await
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    debug!(path = %path.display(), count = categories.len(), "wrote dataset");
    Ok(())
}
