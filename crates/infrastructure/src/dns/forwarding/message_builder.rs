//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;
use zonecheck_domain::{DomainError, RecordType};

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a DNS query message and serialize to wire format bytes
    ///
    /// Creates a standard recursive query with:
    /// - Random ID for request/response matching
    /// - RD (Recursion Desired) flag set
    /// - Single question section, class IN
    ///
    /// Names from the data file are queried as absolute names whether or
    /// not they carry a trailing dot.
    pub fn build_query(domain: &str, record_type: &RecordType) -> Result<Vec<u8>, DomainError> {
        Self::build_query_with_id(domain, record_type).map(|(_, bytes)| bytes)
    }

    /// Build a query message and return both the message ID and bytes
    pub fn build_query_with_id(
        domain: &str,
        record_type: &RecordType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Self::absolute_name(domain)?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn absolute_name(domain: &str) -> Result<Name, DomainError> {
        if domain.is_empty() {
            return Err(DomainError::InvalidDomainName("empty name".to_string()));
        }

        let mut name = Name::from_str(domain).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
        })?;
        name.set_fqdn(true);
        Ok(name)
    }

    /// Serialize a Message to wire format bytes
    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
