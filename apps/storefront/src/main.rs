//! `rocketshoes` binary entry point.
//!
//! All logic lives in the library crate (lib.rs).

use clap::Parser;
use tracing::error;

use rocketshoes_storefront::{init_tracing, run, Cli};

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!(error = %e, "rocketshoes failed");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
