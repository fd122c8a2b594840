use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_URL: &str = "grpc://grpc.trongrid.io:50051";
pub const CONNECT_TIMEOUT_DURATION: u64 = 20_000;
pub const KEEP_ALIVE_DURATION: u64 = 5_000;
pub const REQUEST_TIMEOUT_DURATION: u64 = 5_000;

/// Connection settings of a [`GrpcClient`](crate::GrpcClient).
///
/// Every field has a default, so a TOML file only lists what it changes:
///
/// ```toml
/// url = "grpcs://grpc.shasta.trongrid.io:50051"
/// request-timeout-ms = 10000
/// api-key = "..."
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct ClientConfig {
    /// Node address, `grpc://` for plain text or `grpcs://` for TLS.
    pub url: String,
    pub request_timeout_ms: u64,
    pub connect_timeout_ms: u64,
    pub keep_alive_ms: u64,
    /// Sent as `TRON-PRO-API-KEY` metadata with every request.
    pub api_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            request_timeout_ms: REQUEST_TIMEOUT_DURATION,
            connect_timeout_ms: CONNECT_TIMEOUT_DURATION,
            keep_alive_ms: KEEP_ALIVE_DURATION,
            api_key: None,
        }
    }
}

impl ClientConfig {
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn keep_alive(&self) -> Duration {
        Duration::from_millis(self.keep_alive_ms)
    }

    /// The `http(s)://` form the transport dials.
    pub fn endpoint_url(&self) -> Result<String> {
        if let Some(rest) = self.url.strip_prefix("grpc://") {
            Ok(format!("http://{rest}"))
        } else if let Some(rest) = self.url.strip_prefix("grpcs://") {
            Ok(format!("https://{rest}"))
        } else {
            Err(Error::GrpcAddressSchema(self.url.clone()))
        }
    }

    pub fn is_tls(&self) -> bool {
        self.url.starts_with("grpcs://")
    }
}
