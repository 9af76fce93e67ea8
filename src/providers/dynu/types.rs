use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::record::{DNSRecord, DNSRecordType};
use crate::providers::dynu::error::DynuProviderError;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DnsRecordsResponse {
    pub dns_records: Vec<DynuRecord>,
}

/// A record as Dynu returns it. Only the value field matching
/// `record_type` is populated.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DynuRecord {
    pub id: u64,
    pub domain_id: u64,
    pub domain_name: Option<String>,
    pub node_name: String,
    pub hostname: Option<String>,
    pub record_type: String,
    pub ttl: u64,
    pub state: bool,
    pub content: Option<String>,
    pub updated_on: Option<String>,
    pub group: Option<String>,
    pub ipv4_address: Option<String>,
    pub ipv6_address: Option<String>,
    pub host: Option<String>,
    pub text_data: Option<String>,
    // SOA
    pub master_name: Option<String>,
    pub responsible_name: Option<String>,
    pub refresh: Option<u64>,
    pub retry: Option<u64>,
    pub expire: Option<u64>,
    #[serde(rename = "negativeTTL")]
    pub negative_ttl: Option<u64>,
}

/// Root domain lookup result.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DynuDomain {
    pub id: u64,
    pub domain_name: String,
    pub hostname: Option<String>,
    pub node: Option<String>,
}

/// Type-specific payload of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValue {
    A(String),
    AAAA(String),
    CNAME(String),
    TXT(String),
    Unsupported(String),
}

impl RecordValue {
    pub fn new(record_type: &DNSRecordType, value: &str) -> Self {
        let value = value.to_string();
        match record_type {
            DNSRecordType::A => RecordValue::A(value),
            DNSRecordType::AAAA => RecordValue::AAAA(value),
            DNSRecordType::CNAME => RecordValue::CNAME(value),
            DNSRecordType::TXT => RecordValue::TXT(value),
            DNSRecordType::Other(other) => RecordValue::Unsupported(other.clone()),
        }
    }
}

impl DynuRecord {
    pub fn value(&self) -> RecordValue {
        let field = |v: &Option<String>| v.clone().unwrap_or_default();
        match self.record_type.as_str() {
            "A" => RecordValue::A(field(&self.ipv4_address)),
            "AAAA" => RecordValue::AAAA(field(&self.ipv6_address)),
            "CNAME" => RecordValue::CNAME(field(&self.host)),
            "TXT" => RecordValue::TXT(field(&self.text_data)),
            other => RecordValue::Unsupported(other.to_string()),
        }
    }
}

/// Body for both create and update calls.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordRequest {
    pub node_name: String,
    pub record_type: String,
    pub ttl: u64,
    pub group: String,
    pub state: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_data: Option<String>,
}

impl RecordRequest {
    pub fn new(
        name: &str,
        value: RecordValue,
        ttl: Duration,
    ) -> Result<Self, DynuProviderError> {
        let mut req = RecordRequest {
            node_name: name.to_string(),
            record_type: String::new(),
            ttl: ttl.as_secs(),
            group: String::new(),
            state: true,
            ipv4_address: None,
            ipv6_address: None,
            host: None,
            text_data: None,
        };
        match value {
            RecordValue::A(addr) => {
                req.record_type = "A".to_string();
                req.ipv4_address = Some(addr);
            }
            RecordValue::AAAA(addr) => {
                req.record_type = "AAAA".to_string();
                req.ipv6_address = Some(addr);
            }
            RecordValue::CNAME(host) => {
                req.record_type = "CNAME".to_string();
                req.host = Some(host);
            }
            RecordValue::TXT(text) => {
                req.record_type = "TXT".to_string();
                req.text_data = Some(text);
            }
            RecordValue::Unsupported(record_type) => {
                return Err(DynuProviderError::UnsupportedRecordType(record_type));
            }
        }
        Ok(req)
    }
}

pub fn to_dns_record(nr: &DynuRecord) -> DNSRecord {
    let value = match nr.value() {
        RecordValue::A(v)
        | RecordValue::AAAA(v)
        | RecordValue::CNAME(v)
        | RecordValue::TXT(v) => v,
        RecordValue::Unsupported(_) => String::new(),
    };
    DNSRecord {
        record_type: DNSRecordType::from(nr.record_type.as_str()),
        name: nr.node_name.clone(),
        value,
        ttl: Duration::from_secs(nr.ttl),
    }
}

pub fn to_record_request(rec: &DNSRecord) -> Result<RecordRequest, DynuProviderError> {
    RecordRequest::new(
        &rec.name,
        RecordValue::new(&rec.record_type, &rec.value),
        rec.ttl,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn native(json: serde_json::Value) -> DynuRecord {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_decode_records_response() {
        let body = json!({
            "statusCode": 200,
            "dnsRecords": [
                {
                    "id": 5, "domainId": 42, "domainName": "example.com",
                    "nodeName": "_acme", "hostname": "_acme.example.com",
                    "recordType": "TXT", "ttl": 300, "state": true,
                    "content": "_acme.example.com. 300 IN TXT \"old\"",
                    "updatedOn": "2024-01-01T00:00:00", "textData": "old"
                },
                {
                    "id": 1, "domainId": 42, "nodeName": "",
                    "recordType": "SOA", "ttl": 3600,
                    "masterName": "ns1.dynu.com", "responsibleName": "admin.example.com",
                    "refresh": 3600, "retry": 300, "expire": 86400, "negativeTTL": 300
                }
            ]
        });
        let resp: DnsRecordsResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.dns_records.len(), 2);
        assert_eq!(resp.dns_records[0].text_data.as_deref(), Some("old"));
        assert_eq!(resp.dns_records[1].negative_ttl, Some(300));
        assert_eq!(
            resp.dns_records[1].value(),
            RecordValue::Unsupported("SOA".to_string())
        );
    }

    #[test]
    fn test_to_dns_record() {
        let nr = native(json!({
            "id": 7, "nodeName": "www", "recordType": "A",
            "ttl": 90, "ipv4Address": "203.0.113.7"
        }));
        let dns = to_dns_record(&nr);
        assert_eq!(dns.record_type, DNSRecordType::A);
        assert_eq!(dns.name, "www");
        assert_eq!(dns.value, "203.0.113.7");
        assert_eq!(dns.ttl, Duration::from_secs(90));
    }

    #[test]
    fn test_to_dns_record_unsupported_type_has_empty_value() {
        let nr = native(json!({
            "id": 8, "nodeName": "", "recordType": "MX", "ttl": 300,
            "content": "example.com. 300 IN MX 10 mail.example.com."
        }));
        let dns = to_dns_record(&nr);
        assert_eq!(dns.record_type, DNSRecordType::Other("MX".to_string()));
        assert_eq!(dns.value, "");
    }

    #[test]
    fn test_a_record_request_decodes_to_same_record() {
        let rec = DNSRecord::new(
            DNSRecordType::A,
            "www",
            "198.51.100.1",
            Duration::from_secs(300),
        );
        let body = serde_json::to_value(to_record_request(&rec).unwrap()).unwrap();
        let back = to_dns_record(&native(body));
        assert_eq!(back, rec);
    }

    #[test]
    fn test_txt_request_body_shape() {
        let rec = DNSRecord::new(
            DNSRecordType::TXT,
            "_acme",
            "new",
            Duration::from_secs(300),
        );
        let body = serde_json::to_value(to_record_request(&rec).unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "nodeName": "_acme",
                "recordType": "TXT",
                "ttl": 300,
                "group": "",
                "state": true,
                "textData": "new"
            })
        );
    }

    #[test]
    fn test_unsupported_record_request_is_rejected() {
        let rec = DNSRecord::new(
            DNSRecordType::Other("MX".to_string()),
            "",
            "10 mail.example.com",
            Duration::from_secs(300),
        );
        assert_matches!(
            to_record_request(&rec),
            Err(DynuProviderError::UnsupportedRecordType(t)) if t == "MX"
        );
    }
}
