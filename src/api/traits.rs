use async_trait::async_trait;

use super::types::ServiceDescriptor;
use crate::utils::AghError;

/// The three primitive round trips offered by the management API
///
/// Everything else the client does is derived from these.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlockedServices: Send + Sync {
    /// GET /blocked_services/all
    async fn blockable_services(&self) -> Result<Vec<ServiceDescriptor>, AghError>;

    /// GET /blocked_services/list
    async fn blocked_list(&self) -> Result<Vec<String>, AghError>;

    /// POST /blocked_services/set
    async fn set_blocked(&self, ids: &[String]) -> Result<(), AghError>;
}
