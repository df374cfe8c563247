use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// cookable - Recipes you can cook with what is in your pantry
#[derive(Parser)]
#[command(name = "cookable")]
#[command(about = "Match your food inventory against a recipe catalog", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print recipe availability for one user of a seed file
    Match {
        /// Seed file with food lists and recipes
        #[arg(long)]
        seed: String,

        /// User whose food list is matched
        #[arg(long)]
        username: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = cookable::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    cookable::observability::init_observability(
        "cookable",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Match { seed, username } => cli::matcher::run(seed, username).await,
    }
}
