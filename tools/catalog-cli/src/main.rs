//! Catalog CLI - Admin tool for the storefront category catalog.
//!
//! Commands:
//! - `catalog list` - List categories with search, sort and paging
//! - `catalog show` - Show one category by id or slug
//! - `catalog create` - Create a category from a JSON request
//! - `catalog update` - Apply a partial update from a JSON request
//! - `catalog deactivate` - Hide a category without deleting it
//! - `catalog validate` - Check a dataset file
//! - `catalog counts` - Check or rewrite cached product counts
//! - `catalog seed` - Write the seed dataset
//! - `catalog init` - Write a default catalog.toml

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use storefront_catalog::CatalogError;
use tracing_subscriber::EnvFilter;

use commands::{
    CountsArgs, CreateArgs, DeactivateArgs, InitArgs, ListArgs, SeedArgs, ShowArgs, UpdateArgs,
    ValidateArgs,
};

/// Log filter variable, e.g. `CATALOG_LOG=storefront_catalog=debug`.
const LOG_ENV: &str = "CATALOG_LOG";

/// Catalog CLI - Manage storefront categories
#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List categories
    List(ListArgs),

    /// Show a category by id or slug
    Show(ShowArgs),

    /// Create a category from a JSON request file
    Create(CreateArgs),

    /// Update a category from a JSON request file
    Update(UpdateArgs),

    /// Hide a category from public listings
    Deactivate(DeactivateArgs),

    /// Validate a dataset file
    Validate(ValidateArgs),

    /// Check cached product counts
    Counts(CountsArgs),

    /// Write the seed dataset
    Seed(SeedArgs),

    /// Create a default catalog.toml
    Init(InitArgs),
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;
    tracing::debug!(data = %ctx.data_path().display(), "resolved dataset");

    // Execute command
    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Create(args) => commands::create::run(args, &ctx).await,
        Commands::Update(args) => commands::update::run(args, &ctx).await,
        Commands::Deactivate(args) => commands::deactivate::run(args, &ctx).await,
        Commands::Validate(args) => commands::validate::run(args, &ctx).await,
        Commands::Counts(args) => commands::counts::run(args, &ctx).await,
        Commands::Seed(args) => commands::seed::run(args, &ctx).await,
        Commands::Init(args) => commands::init::run(args, &ctx).await,
    };

    if let Err(e) = result {
        match e.downcast_ref::<CatalogError>() {
            Some(catalog) if e.chain().count() > 1 => {
                ctx.output.catalog_error(catalog, &format!("{}", e))
            }
            Some(catalog) => ctx.output.catalog_error(catalog, "Rejected"),
            None => ctx.output.error(&format!("{:#}", e)),
        }
        if ctx.output.is_verbose() {
            ctx.output.debug(&format!("{:?}", e));
        }
        std::process::exit(1);
    }

    Ok(())
}
