use std::fmt;

/// Record types a zone data file can declare a check for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    CNAME,
    MX,
    PTR,
    SOA,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::PTR => "PTR",
            RecordType::SOA => "SOA",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
