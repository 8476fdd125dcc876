//! fairroll — verify that a dice roll was provably fair.

mod config;
mod report;
mod run;

use clap::Parser;
use fairroll_client::RollClient;
use fairroll_utils::LogFormat;
use std::path::PathBuf;

use config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "fairroll", about = "Verify provably fair dice rolls")]
struct Cli {
    /// Base URL of the dice service.
    #[arg(long, env = "FAIRROLL_BASE_URL")]
    base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, env = "FAIRROLL_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Connection timeout in seconds.
    #[arg(long, env = "FAIRROLL_CONNECT_TIMEOUT_SECS")]
    connect_timeout_secs: Option<u64>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "FAIRROLL_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "FAIRROLL_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Path to a TOML configuration file. CLI flags and env vars override it.
    #[arg(long, env = "FAIRROLL_CONFIG")]
    config: Option<PathBuf>,

    /// Print the verification report as JSON on stdout.
    #[arg(long, env = "FAIRROLL_JSON")]
    json: bool,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Fetch a roll from the dice service and verify it.
    Fetch {
        /// Address the bet was placed from.
        address: String,
        /// Request ID of the roll.
        request_id: i64,
    },
    /// Verify a roll record stored as JSON ("-" reads stdin).
    Check { file: PathBuf },
    /// Print the effective configuration as TOML.
    Config,
}

/// Layer flags and env vars over the config file (or the defaults).
fn resolve_config(cli: &Cli) -> anyhow::Result<CliConfig> {
    let mut config = match cli.config {
        Some(ref path) => CliConfig::from_toml_file(path)?,
        None => CliConfig::default(),
    };
    if let Some(ref base_url) = cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(secs) = cli.timeout_secs {
        config.timeout_secs = secs;
    }
    if let Some(secs) = cli.connect_timeout_secs {
        config.connect_timeout_secs = secs;
    }
    if let Some(ref level) = cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    fairroll_utils::init_logging(config.log_format, &config.log_level);

    if let Some(ref path) = cli.config {
        tracing::debug!("loaded config from {}", path.display());
    }

    let report = match cli.command {
        Command::Fetch {
            ref address,
            request_id,
        } => {
            let client = RollClient::with_timeouts(
                &config.base_url,
                config.timeout(),
                config.connect_timeout(),
            );
            run::fetch_and_verify(&client, address, request_id).await?
        }
        Command::Check { ref file } => run::check_file(file)?,
        Command::Config => {
            print!("{}", config.to_toml_string()?);
            return Ok(());
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
