use std::fmt;

/// Errors surfaced through [`crate::core::provider::DNSProvider`].
#[allow(clippy::enum_variant_names)]
#[derive(Debug)]
pub enum Error {
    ProviderError(String),
    CredentialError(String),
    ConfigError(String),
    NotFound(String),
    InvalidInput(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ProviderError(msg) => write!(f, "Provider error: {msg}"),
            Error::CredentialError(msg) => write!(f, "Credential error: {msg}"),
            Error::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            Error::NotFound(msg) => write!(f, "Not found: {msg}"),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}
