//! Layered configuration.
//!
//! Built-in defaults are overridden by an optional TOML file and then by
//! `ALLOTMENT__...` environment variables, e.g.
//! `ALLOTMENT__SERVER__PORT=8080` or `ALLOTMENT__SOURCES__STATION=station.csv`.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::diagnostic::MatchTarget;
use crate::error::Result;
use crate::loader::{LoaderOptions, Sources};
use crate::service::LoadPlan;

pub const DEFAULT_CONFIG_FILE: &str = "allotment";
pub const ENV_PREFIX: &str = "ALLOTMENT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Prefix under which the data endpoints are mounted.
    pub base_path: String,
    /// Exposes `POST {base_path}/reload` when set.
    pub allow_reload: bool,
    /// Origins allowed by CORS; `*` allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            base_path: "/api".to_string(),
            allow_reload: false,
            cors_origins: vec!["http://127.0.0.1:5500".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticSettings {
    pub enabled: bool,
    pub target: MatchTarget,
}

impl Default for DiagnosticSettings {
    fn default() -> Self {
        Self { enabled: true, target: MatchTarget::default() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub sources: Sources,
    pub loader: LoaderOptions,
    pub diagnostic: DiagnosticSettings,
}

impl Settings {
    /// Reads `file` (any extension `config` understands, optional) and the environment.
    pub fn load(file: &str) -> Result<Settings> {
        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("server.cors_origins");
        let settings: Settings = Config::builder()
            .add_source(File::with_name(file).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// The reference row to check after each load, if the check is enabled.
    pub fn reference(&self) -> Option<&MatchTarget> {
        self.diagnostic.enabled.then_some(&self.diagnostic.target)
    }

    pub fn load_plan(&self) -> LoadPlan {
        LoadPlan {
            sources: self.sources.clone(),
            options: self.loader.clone(),
            reference: self.reference().cloned(),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
