use std::sync::Arc;

use tracing::{info, warn};

use em_core::employee::{normalize_dob, EmployeeDraft};
use em_core::ids::EmployeeId;
use em_core::ports::{EmployeeTransportPort, TransportError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("employee not found: {0}")]
    NotFound(EmployeeId),

    #[error(transparent)]
    Transport(TransportError),
}

impl LoadError {
    fn from_transport(id: &EmployeeId, err: TransportError) -> Self {
        match err {
            TransportError::NotFound(_) => LoadError::NotFound(id.clone()),
            other => LoadError::Transport(other),
        }
    }

    /// Transport-level view of the failure, as carried by form events.
    pub fn into_transport_error(self) -> TransportError {
        match self {
            LoadError::NotFound(id) => TransportError::NotFound(id.into_inner()),
            LoadError::Transport(err) => err,
        }
    }
}

/// Record loader for the edit flow.
///
/// Fetches one employee and turns it into the form's editable draft, with
/// `dob` normalized to the calendar-date format of the date input.
pub struct LoadEmployee {
    transport: Arc<dyn EmployeeTransportPort>,
}

impl LoadEmployee {
    pub fn new(transport: Arc<dyn EmployeeTransportPort>) -> Self {
        Self { transport }
    }

    /// Issues a single fetch. Never retries.
    #[tracing::instrument(name = "usecase.load_employee.execute", skip(self), fields(employee_id = %id))]
    pub async fn execute(&self, id: &EmployeeId) -> Result<EmployeeDraft, LoadError> {
        let record = self.transport.fetch_record(id).await.map_err(|err| {
            warn!(error = %err, "employee fetch failed");
            LoadError::from_transport(id, err)
        })?;

        let (_, mut draft) = record.into_parts();
        draft.dob = normalize_dob(&draft.dob);
        info!("employee loaded for editing");
        Ok(draft)
    }
}
