//! zonecheck infrastructure layer
//!
//! Sends the queries issued by the record checkers to a real nameserver.
//! Wire format is handled by `hickory-proto`.
pub mod dns;
