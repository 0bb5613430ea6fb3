use anyhow::Context;
use clap::{Parser, Subcommand};
use migration::MigratorTrait;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "blog-admin", version, about = "Blog admin database tooling")]
struct Cli {
    /// Path to config.toml (overrides CONFIG_PATH)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Schema migrations
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
    /// Validate configuration and connectivity
    Check,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum MigrateAction {
    /// Apply pending migrations
    Up,
    /// Roll back the last migration
    Down,
    /// Drop all tables and re-apply every migration
    Fresh,
    /// List applied and pending migrations
    Status,
}

fn load_config(path: Option<&str>) -> anyhow::Result<configs::AppConfig> {
    let _ = dotenvy::dotenv();
    match path {
        Some(p) => {
            let mut cfg = configs::load_from_file(p).with_context(|| format!("failed to read {p}"))?;
            cfg.normalize_and_validate()?;
            Ok(cfg)
        }
        None => configs::AppConfig::load_and_validate(),
    }
}

fn init_logging(cfg: &configs::AppConfig) {
    let style = match cfg.logging.format {
        configs::LogFormat::Compact => common::utils::logging::LogStyle::Compact,
        configs::LogFormat::Json => common::utils::logging::LogStyle::Json,
    };
    common::utils::logging::init_logging(style);
    info!(service = "blog-admin", event = "logger_init", "tracing subscriber initialized");
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let cfg = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    init_logging(&cfg);

    let db = models::db::connect_with_config(&cfg.database).await.context("failed to connect to database")?;
    match cli.command {
        Command::Check => {
            db.ping().await.context("database ping failed")?;
            info!(event = "check_ok", "configuration and database reachable");
        }
        Command::Migrate { action } => {
            match action {
                MigrateAction::Up => migration::Migrator::up(&db, None).await?,
                MigrateAction::Down => migration::Migrator::down(&db, Some(1)).await?,
                MigrateAction::Fresh => migration::Migrator::fresh(&db).await?,
                MigrateAction::Status => migration::Migrator::status(&db).await?,
            }
            info!(event = "migrate", action = ?action, "migration finished");
        }
    }
    db.close().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %format!("{err:#}"), "blog-admin failed");
            eprintln!("{err:#}");
            std::process::ExitCode::FAILURE
        }
    }
}
