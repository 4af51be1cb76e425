use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use tracing::debug;
use zonecheck_domain::{DomainError, RecordType};

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    pub answers: Vec<Record>,
}

impl DnsResponse {
    /// Answer records of `record_type`, rendered as text in answer order.
    ///
    /// Records of other types (for example the CNAME that precedes the A
    /// records of an alias) are left out.
    pub fn records_of_type(&self, record_type: RecordType) -> Vec<String> {
        let wanted = RecordTypeMapper::to_hickory(&record_type);
        self.answers
            .iter()
            .filter(|record| record.record_type() == wanted)
            .filter_map(|record| ResponseParser::render_rdata(record.data()))
            .collect()
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();
        let answers = message.answers().to_vec();

        debug!(
            id = message.id(),
            rcode = ?rcode,
            answers = answers.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode,
            truncated,
            answers,
        })
    }

    /// Text form of one answer record.
    ///
    /// Names are written in their ASCII (punycode) form with the trailing
    /// dot, matching how data files spell them. MX is
    /// `<preference> <exchange>` and SOA is
    /// `<mname> <rname> <serial> <refresh> <retry> <expire> <minimum>`.
    pub fn render_rdata(data: &RData) -> Option<String> {
        match data {
            RData::A(a) => Some(a.0.to_string()),
            RData::CNAME(canonical) => Some(canonical.0.to_ascii()),
            RData::PTR(ptr) => Some(ptr.0.to_ascii()),
            RData::MX(mx) => Some(format!("{} {}", mx.preference(), mx.exchange().to_ascii())),
            RData::SOA(soa) => Some(format!(
                "{} {} {} {} {} {} {}",
                soa.mname().to_ascii(),
                soa.rname().to_ascii(),
                soa.serial(),
                soa.refresh(),
                soa.retry(),
                soa.expire(),
                soa.minimum()
            )),
            _ => None,
        }
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
