use std::env;

use crate::error::Error;
use crate::providers::dynu::DynuConfig;
use crate::providers::dynu::client::DEFAULT_API_URL;

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub zone: String,
}

fn required(name: &str) -> Result<String, Error> {
    env::var(name).map_err(|e| Error::ConfigError(format!("{name}: {e}")))
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Ok(Config {
            api_key: required("DYNU_API_KEY")?,
            api_url: env::var("DYNU_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            zone: required("DYNU_ZONE")?,
        })
    }

    pub fn provider_config(&self) -> DynuConfig {
        DynuConfig {
            api_key: self.api_key.clone(),
            api_url: self.api_url.clone(),
        }
    }
}
