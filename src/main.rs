use std::path::PathBuf;

use clap::Parser;

use twenty48::logging::{setup_console_logging, setup_logging};
use twenty48::{SpawnPolicy, WebUiConfig, WebUiServer};

#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum SpawnPolicyCli {
    /// Tiles only appear when a game starts
    InitialOnly,
    /// A tile appears after every move that changed the board
    EveryMove,
}

impl From<SpawnPolicyCli> for SpawnPolicy {
    fn from(cli: SpawnPolicyCli) -> Self {
        match cli {
            SpawnPolicyCli::InitialOnly => SpawnPolicy::InitialOnly,
            SpawnPolicyCli::EveryMove => SpawnPolicy::EveryMove,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "twenty48", version, about)]
struct Config {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short = 'p', long, default_value_t = 8048)]
    port: u16,

    /// Public URL of the app, quoted in the share text
    #[arg(long, default_value = "http://localhost:8048")]
    app_url: String,

    /// When new tiles are spawned
    #[arg(long, value_enum, default_value = "initial-only")]
    spawn_policy: SpawnPolicyCli,

    /// Seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of games kept in memory
    #[arg(long, default_value_t = 10_000)]
    max_sessions: usize,

    /// Write rotating log files to this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    let _logger = match &config.log_dir {
        Some(dir) => setup_logging(dir, "info")?,
        None => setup_console_logging("info")?,
    };

    let web_config = WebUiConfig {
        port: config.port,
        host: config.host,
        app_url: config.app_url,
        spawn_policy: config.spawn_policy.into(),
        seed: config.seed,
        max_sessions: config.max_sessions,
    };

    if let Some(seed) = web_config.seed {
        log::info!("🎲 Using fixed seed {}", seed);
    }

    WebUiServer::new(web_config).start().await?;
    Ok(())
}
