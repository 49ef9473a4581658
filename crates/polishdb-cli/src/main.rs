use clap::{Parser, Subcommand};

mod import;

#[derive(Debug, Parser)]
#[command(name = "polishdb-cli")]
#[command(about = "Imports a Notion CSV dump into the polish catalog API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print what would be submitted without issuing any requests
    #[arg(long, global = true)]
    dry_run: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Submit each row's brand to /brands/new
    Brands,
    /// Submit primary colors, then effect colors, to /colors/new
    Colors,
    /// Submit each formula value to /formulas/new
    Formulas,
    /// Submit one composite polish record per row to /polish/new
    Polishes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = polishdb_core::load_config_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_level))
        .init();
    tracing::debug!(?config, "loaded configuration");

    let cli = Cli::parse();
    match cli.command {
        Commands::Brands => import::brands::run(&config, cli.dry_run).await,
        Commands::Colors => import::colors::run(&config, cli.dry_run).await,
        Commands::Formulas => import::formulas::run(&config, cli.dry_run).await,
        Commands::Polishes => import::polishes::run(&config, cli.dry_run).await,
    }
}
