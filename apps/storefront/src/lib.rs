//! # RocketShoes Storefront
//!
//! Wires the cart rules from `rocketshoes-core` to real services and exposes
//! them through the `rocketshoes` command line.
//!
//! ## Startup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront Startup                                   │
//! │                                                                         │
//! │  1. Initialize tracing (stderr, RUST_LOG aware)                        │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  2. Load StorefrontConfig (file < env < flags), validate               │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  3. Open SQLite database (runs migrations)                             │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  4. Build ApiClient for /stock and /products                           │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  5. CartManager::load (persisted cart or empty)                        │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  6. Run the subcommand, print cart JSON and notices                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod commands;
pub mod error;
pub mod state;

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rocketshoes_core::{NoticeLog, ProductId};
use rocketshoes_db::{Database, DbConfig, DbError};

use crate::api::ApiClient;
use crate::commands::CartResponse;
use crate::error::AppResult;
use crate::state::{CartManager, CartOptions, CartServices, StorefrontConfig};

/// RocketShoes shopping cart.
#[derive(Debug, Parser)]
#[command(name = "rocketshoes", version, about)]
pub struct Cli {
    /// Config file (defaults to storefront.toml in the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the stock and product API
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// SQLite database holding the persisted cart
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the cart
    Show,

    /// Add one unit of a product
    Add { product_id: ProductId },

    /// Remove a product from the cart
    Remove { product_id: ProductId },

    /// Set a product's amount
    Update {
        product_id: ProductId,

        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug`: All debug messages
/// - `RUST_LOG=rocketshoes=trace`: Trace for storefront code only
/// - Default: `info,rocketshoes=debug,sqlx=warn`
///
/// Logs go to stderr; stdout carries the command output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rocketshoes=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolves configuration for a CLI invocation.
///
/// Flags win over everything `StorefrontConfig::load` gathered.
pub fn resolve_config(cli: &Cli) -> AppResult<StorefrontConfig> {
    let mut config = StorefrontConfig::load(cli.config.clone())?;

    if let Some(url) = &cli.api_url {
        debug!(url = %url, "Overriding API URL from command line");
        config.api.base_url = url.clone();
    }
    if let Some(path) = &cli.db {
        config.storage.database_path = Some(path.clone());
    }

    config.validate()?;
    Ok(config)
}

/// Opens the SQLite database, creating its directory if needed.
pub async fn open_database(config: &StorefrontConfig) -> AppResult<Database> {
    let path = config.database_path()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    info!(?path, "Opening database");
    let db = Database::new(DbConfig::new(path)).await?;

    if !db.health_check().await {
        return Err(
            DbError::ConnectionFailed("database did not answer a test query".to_string()).into(),
        );
    }

    Ok(db)
}

/// Builds a cart manager over the configured API and the given database.
pub async fn build_manager(
    config: &StorefrontConfig,
    db: &Database,
    notices: Arc<NoticeLog>,
) -> AppResult<CartManager> {
    let api = Arc::new(ApiClient::from_settings(&config.api)?);

    let services = CartServices {
        inventory: api.clone(),
        catalog: api,
        storage: Arc::new(db.slots()),
        notifier: notices,
    };

    Ok(CartManager::load(services, CartOptions::from(&config.cart)).await)
}

/// Runs one subcommand against the manager.
pub async fn execute(
    manager: &mut CartManager,
    command: &Command,
    currency_symbol: &str,
) -> CartResponse {
    match *command {
        Command::Show => commands::show_cart(manager, currency_symbol),
        Command::Add { product_id } => {
            commands::add_to_cart(manager, product_id, currency_symbol).await
        }
        Command::Remove { product_id } => {
            commands::remove_from_cart(manager, product_id, currency_symbol).await
        }
        Command::Update { product_id, amount } => {
            commands::update_cart_item(manager, product_id, amount, currency_symbol).await
        }
    }
}

/// CLI entry point.
pub async fn run(cli: Cli) -> AppResult<()> {
    let config = resolve_config(&cli)?;
    let db = open_database(&config).await?;

    let notices = Arc::new(NoticeLog::new());
    let mut manager = build_manager(&config, &db, notices.clone()).await?;

    let response = execute(&mut manager, &cli.command, &config.display.currency_symbol).await;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &response)?;
    writeln!(stdout)?;

    for notice in notices.drain() {
        eprintln!("{}", notice);
    }

    db.close().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_update_with_negative_amount() {
        let cli = Cli::try_parse_from(["rocketshoes", "update", "3", "-1"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Update {
                product_id: 3,
                amount: -1
            }
        );
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "rocketshoes",
            "add",
            "7",
            "--api-url",
            "http://api.test",
            "--db",
            "/tmp/cart.db",
        ])
        .unwrap();

        assert_eq!(cli.command, Command::Add { product_id: 7 });
        assert_eq!(cli.api_url.as_deref(), Some("http://api.test"));
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/cart.db")));
    }

    #[test]
    fn test_parse_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["rocketshoes", "remove", "abc"]).is_err());
    }

    #[test]
    fn test_flag_overrides_invalid_file_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "[api]\nbase_url = \"ftp://nowhere\"\n").unwrap();
        let path = path.to_string_lossy().into_owned();

        let cli = Cli::try_parse_from([
            "rocketshoes",
            "--config",
            path.as_str(),
            "--api-url",
            "http://api.test:3333",
            "show",
        ])
        .unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.api.base_url, "http://api.test:3333");

        let cli = Cli::try_parse_from(["rocketshoes", "--config", path.as_str(), "show"]).unwrap();
        assert!(matches!(
            resolve_config(&cli),
            Err(crate::error::AppError::Config(
                crate::error::ConfigError::InvalidValue { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn test_open_database_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storefront.db");

        let mut config = StorefrontConfig::default();
        config.storage.database_path = Some(path.clone());

        let db = open_database(&config).await.unwrap();
        assert!(path.exists());
        assert!(db.health_check().await);
        db.close().await;
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
