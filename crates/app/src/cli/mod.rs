use clap::{Parser, Subcommand};
use pricebook_app::{
    database::{self, Db},
    domain::registry::RegistryKind,
};

mod db;
mod export;
mod registry;

#[derive(Debug, Parser)]
#[command(name = "pricebook-app", about = "Pricebook CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    /// Manage the product registry
    Product(registry::RegistryCommand),
    /// Manage the distributor registry
    Distributor(registry::RegistryCommand),
    Export(export::ExportArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Product(command) => registry::run(RegistryKind::Products, command).await,
            Commands::Distributor(command) => {
                registry::run(RegistryKind::Distributors, command).await
            }
            Commands::Export(args) => export::run(args).await,
        }
    }
}

async fn connect(database_url: &str) -> Result<Db, String> {
    database::connect(database_url)
        .await
        .map(Db::new)
        .map_err(|error| format!("failed to connect to database: {error}"))
}
