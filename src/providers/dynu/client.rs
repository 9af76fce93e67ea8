use reqwest::Method;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use crate::providers::dynu::error::DynuProviderError;
use crate::providers::dynu::index::RecordIndex;
use crate::providers::dynu::transport::{HttpTransport, Transport};
use crate::providers::dynu::types::*;

pub const DEFAULT_API_URL: &str = "https://api.dynu.com/v2";

#[derive(Clone)]
pub struct DynuConfig {
    pub api_key: String,
    pub api_url: String,
}

impl DynuConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl fmt::Debug for DynuConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynuConfig")
            .field("api_key", &"<REDACTED>")
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// Strips one trailing dot from a zone name.
pub fn zone_hostname(zone: &str) -> &str {
    zone.strip_suffix('.').unwrap_or(zone)
}

/// Dynu API client bound to one API key and base URL.
pub struct DynuClient {
    api_url: String,
    transport: Arc<dyn Transport>,
}

impl DynuClient {
    pub fn new(config: DynuConfig) -> Result<Self, DynuProviderError> {
        if config.api_key.is_empty() {
            return Err(DynuProviderError::Credential(
                "Dynu API key cannot be empty".to_string(),
            ));
        }
        let transport = HttpTransport::new(config.api_key)?;
        Ok(Self::with_transport(config.api_url, Arc::new(transport)))
    }

    pub fn with_transport(api_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    fn records_url(&self, domain_id: &str) -> String {
        format!("{}/dns/{}/record", self.api_url, domain_id)
    }

    fn record_url(&self, domain_id: &str, record_id: u64) -> String {
        format!("{}/dns/{}/record/{}", self.api_url, domain_id, record_id)
    }

    /// Looks up the Dynu domain owning `zone`.
    pub async fn resolve_domain(&self, zone: &str) -> Result<DynuDomain, DynuProviderError> {
        let hostname = zone_hostname(zone);
        let url = format!("{}/dns/getroot/{}", self.api_url, hostname);
        let resolve = async {
            let body = self.transport.call(Method::GET, &url, None).await?;
            Ok::<DynuDomain, DynuProviderError>(serde_json::from_slice(&body)?)
        };
        let domain = resolve
            .await
            .map_err(|e| DynuProviderError::DomainResolution {
                zone: hostname.to_string(),
                source: Box::new(e),
            })?;
        debug!(zone = hostname, domain_id = domain.id, "resolved domain");
        Ok(domain)
    }

    pub async fn list_native_records(
        &self,
        domain_id: &str,
    ) -> Result<Vec<DynuRecord>, DynuProviderError> {
        let body = self
            .transport
            .call(Method::GET, &self.records_url(domain_id), None)
            .await?;
        let response: DnsRecordsResponse = serde_json::from_slice(&body)?;
        Ok(response.dns_records)
    }

    /// Resolves `zone` and fetches all of its records. Returns the records
    /// with the domain id used in record URLs.
    pub async fn list_records_for_zone(
        &self,
        zone: &str,
    ) -> Result<(Vec<DynuRecord>, String), DynuProviderError> {
        let domain_id = self.resolve_domain(zone).await?.id.to_string();
        let records = self.list_native_records(&domain_id).await?;
        Ok((records, domain_id))
    }

    pub async fn record_index(
        &self,
        zone: &str,
    ) -> Result<(RecordIndex, String), DynuProviderError> {
        let (records, domain_id) = self.list_records_for_zone(zone).await?;
        Ok((RecordIndex::build(&records), domain_id))
    }

    pub async fn create_record(
        &self,
        domain_id: &str,
        req: &RecordRequest,
    ) -> Result<(), DynuProviderError> {
        let body = serde_json::to_vec(req)?;
        self.transport
            .call(Method::POST, &self.records_url(domain_id), Some(body))
            .await?;
        info!(
            domain_id,
            record_type = %req.record_type,
            name = %req.node_name,
            "created record"
        );
        Ok(())
    }

    pub async fn update_record(
        &self,
        domain_id: &str,
        record_id: u64,
        req: &RecordRequest,
    ) -> Result<(), DynuProviderError> {
        let body = serde_json::to_vec(req)?;
        self.transport
            .call(
                Method::POST,
                &self.record_url(domain_id, record_id),
                Some(body),
            )
            .await?;
        info!(
            domain_id,
            record_id,
            record_type = %req.record_type,
            name = %req.node_name,
            "updated record"
        );
        Ok(())
    }

    pub async fn delete_record(
        &self,
        domain_id: &str,
        record_id: u64,
    ) -> Result<(), DynuProviderError> {
        self.transport
            .call(Method::DELETE, &self.record_url(domain_id, record_id), None)
            .await?;
        info!(domain_id, record_id, "deleted record");
        Ok(())
    }
}
