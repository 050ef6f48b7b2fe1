use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check payload returned by every service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Simple health service shared by the product and patient APIs
///
/// This service provides a standardised way to report that a service process is up.
/// There is no downstream dependency to probe, so the check always succeeds.
#[derive(Clone, Debug)]
pub struct HealthService {
    service_name: &'static str,
}

impl HealthService {
    /// Creates a health service reporting on behalf of `service_name`.
    pub fn new(service_name: &'static str) -> Self {
        Self { service_name }
    }

    /// Returns a `HealthRes` indicating the service is healthy.
    pub fn check_health(&self) -> HealthRes {
        HealthRes {
            ok: true,
            message: format!("{} is alive", self.service_name),
        }
    }
}
