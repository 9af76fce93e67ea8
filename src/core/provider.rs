use crate::core::record::DNSRecord;
use crate::error::Error;
use async_trait::async_trait;

/// Zone-level record management, independent of any one provider.
///
/// Every call works against the provider's current state; nothing is cached
/// between calls. Dropping a returned future stops the operation after the
/// HTTP round trip in flight, but writes already issued stay applied.
#[async_trait]
pub trait DNSProvider: Send + Sync {
    fn name(&self) -> &str;
    async fn get_records(&self, zone: &str) -> Result<Vec<DNSRecord>, Error>;
    /// Creates or updates each record. Returns the records written.
    async fn append_records(
        &self,
        zone: &str,
        records: Vec<DNSRecord>,
    ) -> Result<Vec<DNSRecord>, Error>;
    async fn set_records(
        &self,
        zone: &str,
        records: Vec<DNSRecord>,
    ) -> Result<Vec<DNSRecord>, Error>;
    /// Deletes each record matched by type and name. Returns the records deleted.
    async fn delete_records(
        &self,
        zone: &str,
        records: Vec<DNSRecord>,
    ) -> Result<Vec<DNSRecord>, Error>;
}
