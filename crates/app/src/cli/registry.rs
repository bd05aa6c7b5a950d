use clap::{Args, Subcommand};
use pricebook_app::domain::registry::{
    DEFAULT_NAME_CACHE_TTL, PgRegistryService, RegistryKind, RegistryService,
    RegistryServiceError, data::NewName,
};

#[derive(Debug, Args)]
pub(crate) struct RegistryCommand {
    #[command(subcommand)]
    command: RegistrySubcommand,
}

#[derive(Debug, Subcommand)]
enum RegistrySubcommand {
    /// Register a new name
    Add(AddArgs),
    /// List registered names
    List(ListArgs),
}

#[derive(Debug, Args)]
pub(crate) struct AddArgs {
    /// Name to register; stored trimmed and uppercased
    #[arg(long)]
    name: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(kind: RegistryKind, command: RegistryCommand) -> Result<(), String> {
    match command.command {
        RegistrySubcommand::Add(args) => add(kind, args).await,
        RegistrySubcommand::List(args) => list(kind, args).await,
    }
}

async fn add(kind: RegistryKind, args: AddArgs) -> Result<(), String> {
    let db = crate::cli::connect(&args.database_url).await?;
    let service = PgRegistryService::new(db, DEFAULT_NAME_CACHE_TTL);

    let registered = service
        .register(kind, NewName { name: args.name })
        .await
        .map_err(|error| match error {
            RegistryServiceError::AlreadyExists => format!("{} already registered", kind.label()),
            RegistryServiceError::MissingRequiredData => "name cannot be empty".to_string(),
            other => format!("failed to register {}: {other}", kind.label()),
        })?;

    println!("name: {}", registered.name);
    println!("created_at: {}", registered.created_at);

    Ok(())
}

async fn list(kind: RegistryKind, args: ListArgs) -> Result<(), String> {
    let db = crate::cli::connect(&args.database_url).await?;
    let service = PgRegistryService::new(db, DEFAULT_NAME_CACHE_TTL);

    let names = service
        .list_registered(kind)
        .await
        .map_err(|error| format!("failed to list {kind}: {error}"))?;

    if names.is_empty() {
        println!("no {kind} registered");
        return Ok(());
    }

    for registered in names {
        println!("{}\t{}", registered.name, registered.created_at);
    }

    Ok(())
}
