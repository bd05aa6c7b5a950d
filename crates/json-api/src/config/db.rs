//! Database Config

use clap::Args;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// How long product and distributor name lists stay cached, in seconds
    #[arg(long, env = "NAME_CACHE_TTL_SECONDS", default_value_t = 600_u64)]
    pub name_cache_ttl_seconds: u64,

    /// Apply pending migrations before serving
    #[arg(long, env = "RUN_MIGRATIONS", default_value_t = false)]
    pub run_migrations: bool,
}
