use crate::error::ServerError;
use crate::host::check_literal_path;
use std::env;
use tracing_subscriber::filter::LevelFilter;

const CUSTOM_HANDLER_PORT: &str = "FUNCTIONS_CUSTOMHANDLER_PORT";
const ROUTE_PREFIX: &str = "ROUTE_PREFIX";
const LOG_LEVEL: &str = "LOG_LEVEL";

/// Where the function app is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runtime {
    Lambda,
    /// Azure Functions custom handler, forwarded requests arrive on localhost.
    CustomHandler { port: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub runtime: Runtime,
    pub route_prefix: String,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let runtime = match lookup(CUSTOM_HANDLER_PORT) {
            Some(port) => Runtime::CustomHandler {
                port: port.trim().parse().map_err(|_| {
                    ServerError::Configuration(format!("{CUSTOM_HANDLER_PORT} is not a port: {port}"))
                })?,
            },
            None => Runtime::Lambda,
        };

        let log_level = match lookup(LOG_LEVEL) {
            Some(level) => level.trim().parse().map_err(|_| {
                ServerError::Configuration(format!("{LOG_LEVEL} is not a log level: {level}"))
            })?,
            None => LevelFilter::INFO,
        };

        let route_prefix = lookup(ROUTE_PREFIX).unwrap_or_else(|| "api".to_string());
        check_literal_path(&route_prefix)
            .map_err(|err| ServerError::Configuration(format!("{ROUTE_PREFIX}: {err}")))?;

        Ok(Self {
            runtime,
            route_prefix,
            log_level,
        })
    }
}
