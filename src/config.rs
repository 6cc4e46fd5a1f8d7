//! Configuration management for the Etsy proxy.
//!
//! Values come from environment variables, `.env` files and an optional JSON
//! secrets file. They are resolved once at startup into an immutable
//! [`Config`] that is handed to the server constructor.
//!
//! Precedence, highest first:
//! 1. Command-line overrides ([`Overrides`])
//! 2. Environment variables (including those loaded from `.env` files)
//! 3. The secrets file named by `ETSY_SECRETS_FILE`
//! 4. Application defaults

use std::{
    collections::HashMap,
    env, fmt,
    io::ErrorKind,
    net::{Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::types::ClientCredentials;

pub const DEFAULT_PORT: u16 = 3003;
pub const DEFAULT_API_URL: &str = "https://api.etsy.com/v3";
pub const DEFAULT_CONNECT_URL: &str = "https://www.etsy.com/oauth/connect";
pub const DEFAULT_SCOPE: &str = "listings_r transactions_r";
pub const DEFAULT_VIEWS_DIR: &str = "views";

pub const SERVER_PORT: &str = "SERVER_PORT";
pub const SERVER_ADDRESS: &str = "SERVER_ADDRESS";
pub const ETSY_API_URL: &str = "ETSY_API_URL";
pub const ETSY_CONNECT_URL: &str = "ETSY_CONNECT_URL";
pub const ETSY_API_KEYSTRING: &str = "ETSY_API_KEYSTRING";
pub const ETSY_CLIENT_ID: &str = "ETSY_CLIENT_ID";
pub const ETSY_CODE_VERIFIER: &str = "ETSY_CODE_VERIFIER";
pub const ETSY_REDIRECT_URI: &str = "ETSY_REDIRECT_URI";
pub const ETSY_REFRESH_TOKEN: &str = "ETSY_REFRESH_TOKEN";
pub const ETSY_SCOPE: &str = "ETSY_SCOPE";
pub const ETSY_SECRETS_FILE: &str = "ETSY_SECRETS_FILE";
pub const VIEWS_DIR: &str = "VIEWS_DIR";

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
    SecretsIo(std::io::Error),
    SecretsJson(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, value } => write!(f, "invalid value for {}: {:?}", key, value),
            ConfigError::SecretsIo(e) => write!(f, "cannot read secrets file: {}", e),
            ConfigError::SecretsJson(e) => write!(f, "cannot parse secrets file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::SecretsIo(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::SecretsJson(err)
    }
}

/// Contents of a `secrets.json` file.
///
/// Only the fields the server needs are read; other keys such as
/// `shared_secret` or `store_id` are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Secrets {
    pub keystring: Option<String>,
    pub refresh_token: Option<String>,
}

impl Secrets {
    pub async fn read(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = async_fs::read_to_string(path.as_ref()).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Values given on the command line. They win over everything else.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub port: Option<u16>,
    pub views_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub api_url: String,
    pub connect_url: String,
    pub api_key: String,
    pub credentials: ClientCredentials,
    pub refresh_token: Option<String>,
    pub scope: String,
    pub views_dir: PathBuf,
}

impl Config {
    /// Resolves a configuration from a variable map and an optional secrets file.
    ///
    /// Empty values count as unset, so a copied `.env.example` with blank
    /// entries falls back to the defaults.
    pub fn from_vars(
        vars: &HashMap<String, String>,
        secrets: Option<Secrets>,
        overrides: &Overrides,
    ) -> Result<Self, ConfigError> {
        let secrets = secrets.unwrap_or_default();

        let port = match lookup(vars, SERVER_PORT) {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: SERVER_PORT,
                value: value.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let mut server_addr = match lookup(vars, SERVER_ADDRESS) {
            Some(value) => value.parse::<SocketAddr>().map_err(|_| ConfigError::Invalid {
                key: SERVER_ADDRESS,
                value: value.to_string(),
            })?,
            None => SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
        };
        if let Some(port) = overrides.port {
            server_addr.set_port(port);
        }

        let api_key = lookup(vars, ETSY_API_KEYSTRING)
            .map(str::to_string)
            .or_else(|| secrets.keystring.clone().filter(|k| !k.is_empty()))
            .ok_or(ConfigError::Missing(ETSY_API_KEYSTRING))?;

        let client_id = lookup(vars, ETSY_CLIENT_ID)
            .map(str::to_string)
            .unwrap_or_else(|| api_key.clone());

        let code_verifier = lookup(vars, ETSY_CODE_VERIFIER)
            .map(str::to_string)
            .ok_or(ConfigError::Missing(ETSY_CODE_VERIFIER))?;

        let redirect_uri = lookup(vars, ETSY_REDIRECT_URI)
            .map(str::to_string)
            .unwrap_or_else(|| {
                format!("http://localhost:{}/oauth/redirect", server_addr.port())
            });

        let refresh_token = lookup(vars, ETSY_REFRESH_TOKEN)
            .map(str::to_string)
            .or_else(|| secrets.refresh_token.filter(|t| !t.is_empty()));

        let views_dir = match &overrides.views_dir {
            Some(dir) => dir.clone(),
            None => PathBuf::from(lookup(vars, VIEWS_DIR).unwrap_or(DEFAULT_VIEWS_DIR)),
        };

        Ok(Config {
            server_addr,
            api_url: trim_url(lookup(vars, ETSY_API_URL).unwrap_or(DEFAULT_API_URL)),
            connect_url: lookup(vars, ETSY_CONNECT_URL)
                .unwrap_or(DEFAULT_CONNECT_URL)
                .to_string(),
            api_key,
            credentials: ClientCredentials {
                client_id,
                code_verifier,
                redirect_uri,
            },
            refresh_token,
            scope: lookup(vars, ETSY_SCOPE).unwrap_or(DEFAULT_SCOPE).to_string(),
            views_dir,
        })
    }
}

fn lookup<'a>(vars: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn trim_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Loads environment variables from `.env` files.
///
/// Looks in the working directory first, then in the platform-specific
/// local data directory:
/// - Linux: `~/.local/share/etsyproxy/.env`
/// - macOS: `~/Library/Application Support/etsyproxy/.env`
/// - Windows: `%LOCALAPPDATA%/etsyproxy/.env`
///
/// Variables already present in the environment are never overwritten, so
/// the first file to define a key wins. Missing files are skipped.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("etsyproxy/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    load_env_file(Path::new(".env"))?;
    load_env_file(&path)
}

fn load_env_file(path: &Path) -> Result<(), String> {
    match dotenv::from_path(path) {
        Ok(()) => Ok(()),
        Err(dotenv::Error::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(format!("{}: {}", path.display(), e)),
    }
}

/// Builds the [`Config`] from the process environment.
///
/// Reads the secrets file first when `ETSY_SECRETS_FILE` is set.
pub async fn load(overrides: &Overrides) -> Result<Config, ConfigError> {
    let vars: HashMap<String, String> = env::vars().collect();

    let secrets = match lookup(&vars, ETSY_SECRETS_FILE) {
        Some(path) => Some(Secrets::read(path).await?),
        None => None,
    };

    Config::from_vars(&vars, secrets, overrides)
}
