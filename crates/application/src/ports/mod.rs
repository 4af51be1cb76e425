pub mod dns_resolver;

pub use dns_resolver::{DnsAnswer, DnsResolver};
