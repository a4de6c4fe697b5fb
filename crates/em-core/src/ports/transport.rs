use async_trait::async_trait;

use super::TransportError;
use crate::employee::{EmployeeDraft, EmployeeRecord};
use crate::ids::EmployeeId;

/// Remote employee store.
///
/// Each call is one request; implementations never retry.
#[async_trait]
pub trait EmployeeTransportPort: Send + Sync {
    async fn create_record(&self, draft: &EmployeeDraft) -> Result<EmployeeRecord, TransportError>;

    async fn update_record(
        &self,
        id: &EmployeeId,
        draft: &EmployeeDraft,
    ) -> Result<EmployeeRecord, TransportError>;

    /// Fails with [`TransportError::NotFound`] when no record has `id`.
    async fn fetch_record(&self, id: &EmployeeId) -> Result<EmployeeRecord, TransportError>;

    async fn fetch_all(&self) -> Result<Vec<EmployeeRecord>, TransportError>;

    async fn delete_record(&self, id: &EmployeeId) -> Result<(), TransportError>;
}
