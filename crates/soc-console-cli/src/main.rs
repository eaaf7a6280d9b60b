/*
[INPUT]:  CLI arguments, optional YAML configuration, SOC_CONSOLE_* environment
[OUTPUT]: Backend responses as pretty JSON on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use soc_console_adapter::ConsoleClient;
use soc_console_cli::commands::{self, ConfigCommand};
use soc_console_cli::{Cli, CliConfig, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let mut config = CliConfig::load(args.config_path.as_deref()).context("load config")?;
    config.apply_overrides(args.base_url, args.token);
    debug!(
        base_url = %config.base_url,
        authenticated = config.access_token.is_some(),
        "configuration resolved"
    );

    let client = || build_client(&config);
    let output = match args.command {
        Command::Config(ConfigCommand::Show) => {
            let rendered = serde_yaml::to_string(&config.masked()).context("render config")?;
            print!("{rendered}");
            return Ok(());
        }
        Command::License(command) => commands::run_license(&client()?, command).await?,
        Command::Connectors(command) => commands::run_connectors(&client()?, command).await?,
        Command::Graylog(command) => commands::run_graylog(&client()?, command).await?,
    };
    debug!("request completed");

    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("render response")?
    );
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn build_client(config: &CliConfig) -> Result<ConsoleClient> {
    let mut client =
        ConsoleClient::with_config(config.client_config()).context("create console client")?;
    if let Some(credentials) = config.credentials() {
        client.set_credentials(credentials);
    }
    Ok(client)
}
