use clap::Args;
use pricebook_app::database;
use tracing::info;

#[derive(Debug, Args)]
pub(crate) struct MigrateArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: MigrateArgs) -> Result<(), String> {
    let db = crate::cli::connect(&args.database_url).await?;

    database::migrate(db.pool())
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    info!("migrations applied");

    println!("migrations applied");

    Ok(())
}
