//! zonecheck application layer
//!
//! Record checkers and the zone check use case, written against the
//! [`ports::DnsResolver`] port so they can run against a live nameserver or
//! a test double.
pub mod ports;
pub mod use_cases;
