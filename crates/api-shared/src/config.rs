//! Server runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the servers. The
//! parse helpers take the raw optional values rather than reading process-wide environment
//! variables themselves, so tests can exercise them without touching the environment.

use std::net::SocketAddr;

/// Default bind address for the product catalog API.
pub const DEFAULT_PRODUCT_API_ADDR: &str = "0.0.0.0:5000";

/// Default bind address for the patient registration API.
pub const DEFAULT_PATIENT_API_ADDR: &str = "0.0.0.0:5001";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid socket address for {name}: {value:?}")]
    InvalidAddr {
        name: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Bind addresses for both demo services.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    product_addr: SocketAddr,
    patient_addr: SocketAddr,
}

impl ServerConfig {
    pub fn new(product_addr: SocketAddr, patient_addr: SocketAddr) -> Self {
        Self {
            product_addr,
            patient_addr,
        }
    }

    /// Build a config from optional raw values, falling back to the defaults.
    pub fn from_values(
        product_addr: Option<String>,
        patient_addr: Option<String>,
    ) -> ConfigResult<Self> {
        Ok(Self {
            product_addr: addr_from_env_value(
                "PRODUCT_API_ADDR",
                product_addr,
                DEFAULT_PRODUCT_API_ADDR,
            )?,
            patient_addr: addr_from_env_value(
                "PATIENT_API_ADDR",
                patient_addr,
                DEFAULT_PATIENT_API_ADDR,
            )?,
        })
    }

    pub fn product_addr(&self) -> SocketAddr {
        self.product_addr
    }

    pub fn patient_addr(&self) -> SocketAddr {
        self.patient_addr
    }
}

/// Parse a socket address from an optional string value.
///
/// If `value` is `None` or empty/whitespace, `default` is parsed instead.
pub fn addr_from_env_value(
    name: &'static str,
    value: Option<String>,
    default: &str,
) -> ConfigResult<SocketAddr> {
    let raw = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string());

    raw.parse::<SocketAddr>()
        .map_err(|source| ConfigError::InvalidAddr {
            name,
            value: raw,
            source,
        })
}
