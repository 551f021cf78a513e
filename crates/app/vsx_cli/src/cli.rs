use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use vsx_core::config::StoreConfig;

/// Connection flags override `DATABASE_URL`, `DB_MAX_CONNECTIONS` and
/// `DB_ACQUIRE_TIMEOUT_SECS`, which in turn override the built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "vsx", version, about = "Extension registry token lookups")]
pub struct Cli {
    /// PostgreSQL connection URL.
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    /// Maximum number of pooled connections.
    #[arg(long, global = true)]
    pub max_connections: Option<u32>,

    /// Seconds to wait for a pooled connection.
    #[arg(long, global = true)]
    pub acquire_timeout_secs: Option<u64>,

    /// Answer from a JSON fixture of accounts and tokens instead of PostgreSQL.
    #[arg(long, global = true, value_name = "FILE")]
    pub fixture: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn store_config(&self) -> StoreConfig {
        self.apply_flags(StoreConfig::from_env())
    }

    fn apply_flags(&self, mut config: StoreConfig) -> StoreConfig {
        if let Some(url) = &self.database_url {
            config.database_url = url.clone();
        }
        if let Some(max) = self.max_connections {
            config.max_connections = max;
        }
        if let Some(secs) = self.acquire_timeout_secs {
            config.acquire_timeout = Duration::from_secs(secs);
        }
        config
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the version.
    Version,

    /// Print whether a token with this value exists.
    HasToken { value: String },

    /// Print whether this value is an active token of an admin account.
    IsAdminToken { value: String },
}
