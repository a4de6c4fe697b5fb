use crate::employee::{EmployeeDraft, EmployeeRecord, FieldId};
use crate::ports::TransportError;

/// Events that drive the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    // Record loader results
    Loaded { draft: EmployeeDraft },
    LoadFailed { error: TransportError },

    // User input
    FieldChanged { field: FieldId, value: String },
    Submit,
    Reset,
    Cancel,
    AddAnotherDeclined,

    // Submission pipeline results
    SubmitSucceeded { record: EmployeeRecord },
    /// Carries a user-facing reason.
    SubmitFailed { reason: String },
}
