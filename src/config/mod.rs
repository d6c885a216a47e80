use sqlx::postgres::PgConnectOptions;
use std::env;
use std::fmt;
use std::str::FromStr;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_address: String,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseConfig {
    /// A full `postgres://` connection URL
    Url(String),
    Params {
        host: String,
        port: u16,
        user: String,
        password: String,
        name: String,
    },
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    MissingVar(&'static str),
    InvalidVar { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingVar(name) => write!(f, "{} must be set", name),
            ConfigError::InvalidVar { name, value } => {
                write!(f, "{} has an invalid value: {:?}", name, value)
            }
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let required = |key: &'static str| var(key).ok_or(ConfigError::MissingVar(key));

        let database = match var("DATABASE_URL") {
            Some(url) => DatabaseConfig::Url(url),
            None => {
                let port = match var("DBPORT") {
                    Some(value) => value.parse().map_err(|_| ConfigError::InvalidVar {
                        name: "DBPORT",
                        value,
                    })?,
                    None => DEFAULT_DB_PORT,
                };
                DatabaseConfig::Params {
                    host: var("DBHOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
                    port,
                    user: required("DBUSER")?,
                    password: required("DBPASS")?,
                    name: required("DBNAME")?,
                }
            }
        };

        Ok(Config {
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            database,
        })
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match self {
            DatabaseConfig::Url(url) => PgConnectOptions::from_str(url),
            DatabaseConfig::Params {
                host,
                port,
                user,
                password,
                name,
            } => Ok(PgConnectOptions::new()
                .host(host)
                .port(*port)
                .username(user)
                .password(password)
                .database(name)),
        }
    }
}
