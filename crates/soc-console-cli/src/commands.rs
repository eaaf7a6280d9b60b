/*
[INPUT]:  Parsed command-line arguments and a ConsoleClient
[OUTPUT]: JSON values of backend responses ready for printing
[POS]:    CLI layer - one subcommand per adapter operation
[UPDATE]: When adapter operations are added or their arguments change
*/

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use soc_console_adapter::{
    CheckoutPayload, ConnectorRequestPayload, ConsoleClient, NewLicensePayload, UploadForm,
};

#[derive(Parser, Debug)]
#[command(name = "soc-console", version, about = "SOC console backend command-line client")]
pub struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config_path: Option<PathBuf>,
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,
    #[arg(long = "token", value_name = "TOKEN", global = true)]
    pub token: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// License management
    #[command(subcommand)]
    License(LicenseCommand),
    /// Data-connector configuration
    #[command(subcommand)]
    Connectors(ConnectorsCommand),
    /// Log-aggregation proxy
    #[command(subcommand)]
    Graylog(GraylogCommand),
    /// Inspect the resolved configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
pub enum LicenseCommand {
    /// Show the stored license key
    Get,
    /// List features unlocked by the license
    Features,
    /// List purchasable subscription features
    SubscriptionFeatures,
    /// Verify the current license
    Verify,
    /// Replace the stored license key
    Replace { license_key: String },
    /// Start a checkout session
    Checkout(CheckoutArgs),
    /// Look up a license key by email
    Retrieve { email: String },
    /// Extend the license period (deprecated)
    Extend { period: u32 },
    /// Request a trial key (deprecated)
    Create(CreateLicenseArgs),
}

#[derive(Args, Debug)]
pub struct CheckoutArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long = "feature-id")]
    pub feature_id: i64,
    #[arg(long = "cancel-url")]
    pub cancel_url: String,
    #[arg(long = "success-url")]
    pub success_url: String,
}

#[derive(Args, Debug)]
pub struct CreateLicenseArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long = "company")]
    pub company_name: String,
}

#[derive(Subcommand, Debug)]
pub enum ConnectorsCommand {
    /// List all connectors
    List,
    /// Show one connector
    Get { connector_id: String },
    /// Test a connector against its remote service
    Verify { connector_id: String },
    /// Configure a connector
    Configure {
        connector_id: String,
        #[command(flatten)]
        settings: ConnectorArgs,
    },
    /// Update a configured connector
    Update {
        connector_id: String,
        #[command(flatten)]
        settings: ConnectorArgs,
    },
    /// Upload a connector configuration file
    Upload {
        file: PathBuf,
        /// Multipart field name for the file
        #[arg(long, default_value = "file")]
        field: String,
    },
}

#[derive(Args, Debug)]
pub struct ConnectorArgs {
    #[arg(long)]
    pub url: String,
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long = "api-key")]
    pub api_key: Option<String>,
}

impl From<ConnectorArgs> for ConnectorRequestPayload {
    fn from(args: ConnectorArgs) -> Self {
        Self {
            connector_url: args.url,
            connector_username: args.username,
            connector_password: args.password,
            connector_api_key: args.api_key,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum GraylogCommand {
    /// Show one page of log messages
    Messages {
        #[arg(long)]
        page: Option<u32>,
    },
    /// Show throughput metrics
    Metrics,
    /// Show index data
    Indices,
    /// Delete an index
    DeleteIndex { index_name: String },
    /// List running inputs
    InputsRunning,
    /// List configured inputs
    InputsConfigured,
    StartInput { input_id: String },
    StopInput { input_id: String },
    InputState { input_id: String },
    /// List streams
    Streams,
    PauseStream { stream_id: String },
    ResumeStream { stream_id: String },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the resolved configuration (token masked)
    Show,
}

fn to_json<T: Serialize>(response: T) -> Result<Value> {
    serde_json::to_value(response).context("encode response")
}

#[allow(deprecated)]
pub async fn run_license(client: &ConsoleClient, command: LicenseCommand) -> Result<Value> {
    debug!("running license command");
    match command {
        LicenseCommand::Get => to_json(client.get_license().await?),
        LicenseCommand::Features => to_json(client.get_license_features().await?),
        LicenseCommand::SubscriptionFeatures => {
            to_json(client.get_subscription_features().await?)
        }
        LicenseCommand::Verify => to_json(client.verify_license().await?),
        LicenseCommand::Replace { license_key } => {
            to_json(client.replace_license(&license_key).await?)
        }
        LicenseCommand::Checkout(args) => {
            let payload = CheckoutPayload {
                email: args.email,
                feature_id: args.feature_id,
                cancel_url: args.cancel_url,
                success_url: args.success_url,
            };
            to_json(client.create_checkout_session(&payload).await?)
        }
        LicenseCommand::Retrieve { email } => {
            to_json(client.retrieve_license_by_email(&email).await?)
        }
        LicenseCommand::Extend { period } => to_json(client.extend_license(period).await?),
        LicenseCommand::Create(args) => {
            let payload = NewLicensePayload {
                name: args.name,
                email: args.email,
                company_name: args.company_name,
            };
            to_json(client.create_license(payload).await?)
        }
    }
}

pub async fn run_connectors(client: &ConsoleClient, command: ConnectorsCommand) -> Result<Value> {
    debug!("running connectors command");
    match command {
        ConnectorsCommand::List => to_json(client.get_connectors().await?),
        ConnectorsCommand::Get { connector_id } => {
            to_json(client.get_connector(&connector_id).await?)
        }
        ConnectorsCommand::Verify { connector_id } => {
            to_json(client.verify_connector(&connector_id).await?)
        }
        ConnectorsCommand::Configure {
            connector_id,
            settings,
        } => {
            let payload = ConnectorRequestPayload::from(settings);
            to_json(client.configure_connector(&connector_id, &payload).await?)
        }
        ConnectorsCommand::Update {
            connector_id,
            settings,
        } => {
            let payload = ConnectorRequestPayload::from(settings);
            to_json(client.update_connector(&connector_id, &payload).await?)
        }
        ConnectorsCommand::Upload { file, field } => {
            let form = UploadForm::new()
                .with_file_from_path(field, &file)
                .await
                .with_context(|| format!("read upload file {}", file.display()))?;
            to_json(client.upload_connector_file(form).await?)
        }
    }
}

pub async fn run_graylog(client: &ConsoleClient, command: GraylogCommand) -> Result<Value> {
    debug!("running graylog command");
    match command {
        GraylogCommand::Messages { page } => to_json(client.get_messages(page).await?),
        GraylogCommand::Metrics => to_json(client.get_metrics().await?),
        GraylogCommand::Indices => to_json(client.get_indices().await?),
        GraylogCommand::DeleteIndex { index_name } => {
            to_json(client.delete_index(&index_name).await?)
        }
        GraylogCommand::InputsRunning => to_json(client.get_inputs_running().await?),
        GraylogCommand::InputsConfigured => to_json(client.get_inputs_configured().await?),
        GraylogCommand::StartInput { input_id } => to_json(client.start_input(&input_id).await?),
        GraylogCommand::StopInput { input_id } => to_json(client.stop_input(&input_id).await?),
        GraylogCommand::InputState { input_id } => {
            to_json(client.get_input_state(&input_id).await?)
        }
        GraylogCommand::Streams => to_json(client.get_streams().await?),
        GraylogCommand::PauseStream { stream_id } => {
            to_json(client.stop_stream(&stream_id).await?)
        }
        GraylogCommand::ResumeStream { stream_id } => {
            to_json(client.start_stream(&stream_id).await?)
        }
    }
}
