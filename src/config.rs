use std::fmt;
use std::net::{IpAddr, SocketAddr};

use axum::http::{HeaderName, HeaderValue, Method};
use config::{Config, ConfigError, File};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use sqlx::{
    postgres::{PgConnectOptions, PgSslMode},
    ConnectOptions,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub cors: CorsSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Deserialize, Clone)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: Secret<String>,
    pub host: String,
    pub port: u16,
    pub database_name: String,
    pub require_ssl: bool,
}

impl DatabaseSettings {
    pub fn without_db(&self) -> PgConnectOptions {
        let ssl_mode = if self.require_ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Prefer
        };

        let mut pg_connection = PgConnectOptions::new()
            .host(&self.host)
            .username(&self.username)
            .password(self.password.expose_secret())
            .port(self.port)
            .ssl_mode(ssl_mode);
        pg_connection.log_statements(tracing::log::LevelFilter::Trace);
        pg_connection
    }

    pub fn with_db(&self) -> PgConnectOptions {
        self.without_db().database(&self.database_name)
    }
}

/// Cross-origin policy stamped on every response.
#[derive(Deserialize, Clone, Debug)]
pub struct CorsSettings {
    /// A single origin, or `*` for any.
    pub allowed_origin: String,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CorsSettingsError {
    #[error("Invalid CORS origin `{0}`")]
    Origin(String),
    #[error("Invalid CORS method `{0}`")]
    Method(String),
    #[error("Invalid CORS header `{0}`")]
    Header(String),
}

impl CorsSettings {
    pub fn layer(&self) -> Result<CorsLayer, CorsSettingsError> {
        let origin = match self.allowed_origin.trim() {
            "*" => AllowOrigin::from(Any),
            origin => HeaderValue::from_str(origin)
                .map(AllowOrigin::exact)
                .map_err(|_| CorsSettingsError::Origin(origin.to_owned()))?,
        };

        let methods = self
            .allowed_methods
            .iter()
            .map(|m| {
                Method::from_bytes(m.trim().as_bytes())
                    .map_err(|_| CorsSettingsError::Method(m.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let headers = self
            .allowed_headers
            .iter()
            .map(|h| {
                HeaderName::from_bytes(h.trim().as_bytes())
                    .map_err(|_| CorsSettingsError::Header(h.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(methods)
            .allow_headers(headers))
    }
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| ConfigError::Message(format!("Failed to determine the current directory: {e}")))?;
    let config_dir = base_path.join("configuration");
    let base_config = File::from(config_dir.join("base"));

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;
    let env_specific_config = File::from(config_dir.join(environment.as_str()));

    let env_config = config::Environment::with_prefix("app")
        .prefix_separator("_")
        .separator("__");

    let settings = Config::builder()
        .add_source(base_config)
        .add_source(env_specific_config)
        .add_source(env_config)
        .build()?;

    settings.try_deserialize()
}

#[derive(Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`"
            )),
        }
    }
}
