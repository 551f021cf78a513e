// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::sync::Arc;

use clap::Parser;
use cli::{Cli, Commands};
use fixture::Fixture;
use vsx_core::store::postgres::PgStore;
use vsx_core::{Store, TokenLookup};

mod cli;
mod fixture;
mod logging;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init()?;

    let args = Cli::parse();

    match &args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
        Commands::HasToken { value } => {
            let lookup = TokenLookup::new(open_store(&args).await?);
            println!("{}", lookup.has_token(value).await?);
        }
        Commands::IsAdminToken { value } => {
            let lookup = TokenLookup::new(open_store(&args).await?);
            println!("{}", lookup.is_admin_token(value).await?);
        }
    }

    Ok(())
}

async fn open_store(args: &Cli) -> Result<Arc<dyn Store>> {
    match &args.fixture {
        Some(path) => {
            log::debug!("Using fixture {}", path.display());
            let store = Fixture::load(path)?.into_store().await?;
            Ok(Arc::new(store))
        }
        None => Ok(Arc::new(PgStore::connect(&args.store_config()).await?)),
    }
}
