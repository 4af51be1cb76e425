//! Configuration module for zonecheck
//!
//! - `root`: Main configuration and CLI overrides
//! - `resolver`: Target nameserver and query timeout
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
