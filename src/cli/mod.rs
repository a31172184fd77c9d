use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;

use crate::auth;
use crate::config::{AppConfig, StorageBackend};
use crate::database::{migrations, PgStore, Store};

#[derive(Parser)]
#[command(name = "portfolio-api")]
#[command(about = "Portfolio content API server and maintenance commands")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve,

    #[command(about = "Create or update the database tables and exit")]
    Migrate,

    #[command(about = "Print a bcrypt hash for seeding an admin account")]
    HashPassword {
        #[arg(help = "Plain-text password to hash")]
        password: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let config = crate::config::config().clone();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => crate::server::serve(config).await,
        Commands::Migrate => migrate(&config, output_format).await,
        Commands::HashPassword { password } => hash_password(&config, &password, output_format).await,
    }
}

async fn migrate(config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    if config.database.backend != StorageBackend::Postgres {
        anyhow::bail!("migrate requires the postgres backend; set DATABASE_URL");
    }

    let store = PgStore::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    let result = migrations::run(store.pool()).await;
    store.close().await;
    result.context("migration failed")?;

    match output_format {
        OutputFormat::Json => println!("{}", json!({ "success": true, "data": { "migrated": true } })),
        OutputFormat::Text => println!("Migrations applied"),
    }
    Ok(())
}

async fn hash_password(config: &AppConfig, password: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    if password.is_empty() {
        anyhow::bail!("password must not be empty");
    }

    let hash = auth::hash_password_with_cost(password, config.security.bcrypt_cost).await?;

    match output_format {
        OutputFormat::Json => println!("{}", json!({ "success": true, "data": { "hash": hash } })),
        OutputFormat::Text => println!("{}", hash),
    }
    Ok(())
}
