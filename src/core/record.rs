use std::fmt;
use std::time::Duration;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DNSRecordType {
    A,
    AAAA,
    CNAME,
    TXT,
    Other(String),
}

impl fmt::Display for DNSRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DNSRecordType::A => f.write_str("A"),
            DNSRecordType::AAAA => f.write_str("AAAA"),
            DNSRecordType::CNAME => f.write_str("CNAME"),
            DNSRecordType::TXT => f.write_str("TXT"),
            DNSRecordType::Other(other) => f.write_str(other),
        }
    }
}

impl From<&str> for DNSRecordType {
    fn from(value: &str) -> Self {
        match value {
            "A" => DNSRecordType::A,
            "AAAA" => DNSRecordType::AAAA,
            "CNAME" => DNSRecordType::CNAME,
            "TXT" => DNSRecordType::TXT,
            other => DNSRecordType::Other(other.to_string()),
        }
    }
}

/// A provider-agnostic DNS record. `name` is relative to the zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DNSRecord {
    pub record_type: DNSRecordType,
    pub name: String,
    pub value: String,
    pub ttl: Duration,
}

impl DNSRecord {
    pub fn new(
        record_type: DNSRecordType,
        name: impl Into<String>,
        value: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            record_type,
            name: name.into(),
            value: value.into(),
            ttl,
        }
    }
}
