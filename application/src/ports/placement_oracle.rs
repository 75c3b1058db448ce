//! Placement oracle port
//!
//! The oracle is the only party that knows the answers; it decides whether
//! a question sits correctly between its neighbours.

use super::service_error::ServiceError;
use async_trait::async_trait;
use numline_domain::{PlacementRequest, PlacementVerdict};

#[async_trait]
pub trait PlacementOracle: Send + Sync {
    /// Judge a placement. `Ok` carries both right and wrong verdicts; `Err`
    /// is reserved for transport and server faults.
    async fn validate(&self, request: &PlacementRequest) -> Result<PlacementVerdict, ServiceError>;
}
