use std::sync::Arc;

use tracing::{info, warn};

use em_core::employee::{validate, EmployeeDraft, EmployeeRecord, FieldErrors, FieldSchema};
use em_core::form::FormMode;
use em_core::ports::{EmployeeTransportPort, TransportError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The draft does not pass validation. The form checks this before
    /// submitting, so reaching it means a caller skipped the form.
    #[error("draft has {} invalid field(s)", .0.len())]
    Validation(FieldErrors),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Submission pipeline: sends a valid draft as a create or an update.
pub struct SubmitEmployee {
    transport: Arc<dyn EmployeeTransportPort>,
    schema: FieldSchema,
}

impl SubmitEmployee {
    pub fn new(transport: Arc<dyn EmployeeTransportPort>, schema: FieldSchema) -> Self {
        Self { transport, schema }
    }

    /// Create flow calls `create_record`; edit flow calls `update_record`
    /// keyed by the form's identifier. One request, no retry.
    #[tracing::instrument(name = "usecase.submit_employee.execute", skip(self, draft))]
    pub async fn execute(
        &self,
        mode: &FormMode,
        draft: &EmployeeDraft,
    ) -> Result<EmployeeRecord, SubmitError> {
        let errors = validate(&self.schema, draft);
        if !errors.is_empty() {
            warn!(invalid_fields = errors.len(), "submit refused: draft is invalid");
            return Err(SubmitError::Validation(errors));
        }

        let result = match mode {
            FormMode::Create => self.transport.create_record(draft).await,
            FormMode::Edit { id } => self.transport.update_record(id, draft).await,
        };

        match result {
            Ok(record) => {
                info!(employee_id = ?record.id, "employee saved");
                Ok(record)
            }
            Err(err) => {
                warn!(error = %err, "employee save failed");
                Err(err.into())
            }
        }
    }
}
