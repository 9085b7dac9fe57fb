use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cmd;

use tagpro_onboard::config::OnboardConfig;

#[derive(Parser)]
#[command(name = "tagpro-onboard")]
#[command(version, about = "Interactive onboarding wizard for the Tag Pro device")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the config file. Defaults to onboard.toml in the current directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the onboarding wizard
    Run {
        /// Pre-selected installation photo path
        #[arg(long)]
        photo: Option<PathBuf>,

        /// Accept generated defaults without prompting
        #[arg(long)]
        yes: bool,
    },
    /// Print the fixed phase sequence
    Phases,
    /// View or validate configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Validate configuration and show any warnings
    Validate,
    /// Initialize a default onboard.toml file
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Run { photo, yes } => {
            let config = OnboardConfig::load(cli.config.as_deref())?;
            cmd::cmd_run(config, cli.verbose, *yes, photo.clone()).await?;
        }
        Commands::Phases => cmd::cmd_phases(),
        Commands::Config { command } => {
            // `config init` must not try to read the file it is about to
            // create, so loading happens inside the subcommand.
            cmd::cmd_config(cli.config.as_deref(), command.clone())?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
