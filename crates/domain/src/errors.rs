use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Query timeout after {timeout_ms}ms to {server}")]
    QueryTimeout { server: String, timeout_ms: u64 },

    #[error("Server {server} answered {rcode} for {domain}")]
    ErrorResponse {
        server: String,
        domain: String,
        rcode: &'static str,
    },

    #[error("No {record_type} records for {domain}")]
    NoAnswer {
        domain: String,
        record_type: &'static str,
    },

    #[error("Connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("All nameservers unreachable")]
    TransportAllServersUnreachable,
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::IoError(err.to_string())
    }
}
