//! zonecheck domain layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod finding;
pub mod names;
pub mod zone_entry;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig};
pub use dns_query::DnsQuery;
pub use dns_record::RecordType;
pub use errors::DomainError;
pub use finding::{CheckFinding, Observed};
pub use names::{reverse_pointer_name, strip_trailing_dots};
pub use zone_entry::{ZoneEntry, ZoneTag};
