//! Dynu DNS record management behind a provider-agnostic interface.

pub mod config;
pub mod core;
pub mod error;
pub mod providers;

pub use crate::core::provider::DNSProvider;
pub use crate::core::record::{DNSRecord, DNSRecordType};
pub use crate::error::Error;
pub use crate::providers::dynu::{DynuConfig, DynuProvider};
