//! Dynu provider implementation

pub mod client;
pub mod error;
pub mod index;
pub mod transport;
pub mod types;

pub use client::{DynuClient, DynuConfig};
pub use error::DynuProviderError;
pub use types::{DynuRecord, RecordRequest};

use crate::core::provider::DNSProvider;
use crate::core::record::DNSRecord;
use crate::error::Error;
use crate::providers::dynu::error::map_error;
use crate::providers::dynu::types::{to_dns_record, to_record_request};
use async_trait::async_trait;
use tracing::info;

pub struct DynuProvider {
    client: DynuClient,
}

impl DynuProvider {
    pub fn new(config: DynuConfig) -> Result<Self, Error> {
        let client = DynuClient::new(config).map_err(map_error)?;
        Ok(Self { client })
    }

    pub fn from_client(client: DynuClient) -> Self {
        Self { client }
    }

    async fn upsert_records(
        &self,
        zone: &str,
        records: Vec<DNSRecord>,
    ) -> Result<Vec<DNSRecord>, DynuProviderError> {
        // Reject unsupported types before anything is written.
        let requests = records
            .iter()
            .map(to_record_request)
            .collect::<Result<Vec<_>, _>>()?;

        let (index, domain_id) = self.client.record_index(zone).await?;
        for (record, req) in records.iter().zip(&requests) {
            match index.lookup(&req.record_type, &record.name) {
                Some(record_id) => {
                    self.client
                        .update_record(&domain_id, record_id, req)
                        .await?
                }
                None => self.client.create_record(&domain_id, req).await?,
            }
        }
        Ok(records)
    }

    async fn remove_records(
        &self,
        zone: &str,
        records: Vec<DNSRecord>,
    ) -> Result<Vec<DNSRecord>, DynuProviderError> {
        let (index, domain_id) = self.client.record_index(zone).await?;
        for record in &records {
            let record_type = record.record_type.to_string();
            let record_id = index.lookup(&record_type, &record.name).ok_or_else(|| {
                DynuProviderError::RecordNotFound {
                    record_type: record_type.clone(),
                    name: record.name.clone(),
                }
            })?;
            self.client.delete_record(&domain_id, record_id).await?;
        }
        Ok(records)
    }
}

#[async_trait]
impl DNSProvider for DynuProvider {
    fn name(&self) -> &str {
        "dynu"
    }

    /// Records come back last-fetched first.
    async fn get_records(&self, zone: &str) -> Result<Vec<DNSRecord>, Error> {
        self.client
            .list_records_for_zone(zone)
            .await
            .map(|(records, _)| records.iter().rev().map(to_dns_record).collect())
            .map_err(map_error)
    }

    async fn append_records(
        &self,
        zone: &str,
        records: Vec<DNSRecord>,
    ) -> Result<Vec<DNSRecord>, Error> {
        info!(zone, count = records.len(), "appending records");
        self.upsert_records(zone, records).await.map_err(map_error)
    }

    async fn set_records(
        &self,
        zone: &str,
        records: Vec<DNSRecord>,
    ) -> Result<Vec<DNSRecord>, Error> {
        self.append_records(zone, records).await
    }

    async fn delete_records(
        &self,
        zone: &str,
        records: Vec<DNSRecord>,
    ) -> Result<Vec<DNSRecord>, Error> {
        info!(zone, count = records.len(), "deleting records");
        self.remove_records(zone, records).await.map_err(map_error)
    }
}
