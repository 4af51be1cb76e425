use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No nameserver configured")]
    NoNameserver,

    #[error("Query timeout must be greater than zero")]
    ZeroTimeout,

    #[error("Invalid log level '{0}' (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),
}
