use reqwest::{Method, StatusCode};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DynuProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Error calling API status: {status} url: {url} method: {method}")]
    Status {
        status: StatusCode,
        method: Method,
        url: String,
    },

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unable to resolve domain {zone}: {source}")]
    DomainResolution {
        zone: String,
        #[source]
        source: Box<DynuProviderError>,
    },

    #[error("Record not found: {record_type} {name}")]
    RecordNotFound { record_type: String, name: String },

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Credential error: {0}")]
    Credential(String),
}

use crate::error::Error;

pub fn map_error(e: DynuProviderError) -> Error {
    use DynuProviderError::*;
    match e {
        Http(err) => Error::ProviderError(err.to_string()),
        err @ Status { .. } => Error::ProviderError(err.to_string()),
        Decode(err) => Error::ProviderError(format!("unable to decode response: {err}")),
        err @ DomainResolution { .. } => Error::NotFound(err.to_string()),
        err @ RecordNotFound { .. } => Error::NotFound(err.to_string()),
        UnsupportedRecordType(record_type) => {
            Error::InvalidInput(format!("unsupported record type {record_type}"))
        }
        Credential(msg) => Error::CredentialError(msg),
    }
}
