/*
[INPUT]:  Optional YAML file, SOC_CONSOLE_* environment, command-line overrides
[OUTPUT]: Resolved CLI configuration and adapter client settings
[POS]:    Configuration layer - connection setup
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use soc_console_adapter::{ClientConfig, Credentials};

/// Prefix for environment overrides (e.g. `SOC_CONSOLE_BASE_URL`)
pub const ENV_PREFIX: &str = "SOC_CONSOLE";

const MASK: &str = "********";

/// Connection settings for the SOC console backend
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CliConfig {
    /// Backend base URL, including any path prefix
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token sent with every request
    #[serde(default)]
    pub access_token: Option<String>,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: None,
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    ClientConfig::default().base_url
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl CliConfig {
    /// Load configuration from an optional YAML file and the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Load configuration with an explicit environment source
    pub fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Yaml)
                    .required(true),
            );
        }
        builder = builder.add_source(env.try_parsing(true));

        let settings = builder.build().context("read configuration sources")?;
        settings
            .try_deserialize()
            .context("deserialize configuration")
    }

    /// Apply command-line overrides, which win over file and environment
    pub fn apply_overrides(&mut self, base_url: Option<String>, access_token: Option<String>) {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(access_token) = access_token {
            self.access_token = Some(access_token);
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            user_agent: Some(format!("soc-console/{}", env!("CARGO_PKG_VERSION"))),
        }
    }

    pub fn credentials(&self) -> Option<Credentials> {
        self.access_token
            .as_ref()
            .filter(|token| !token.is_empty())
            .map(Credentials::bearer)
    }

    /// Copy safe to print: the token is masked
    pub fn masked(&self) -> Self {
        Self {
            access_token: self.access_token.as_ref().map(|_| MASK.to_string()),
            ..self.clone()
        }
    }
}
