use std::sync::Arc;

use tracing::{info, warn};

use em_core::form::Notice;
use em_core::ids::EmployeeId;
use em_core::ports::{EmployeeTransportPort, NotificationPort, TransportError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the confirmation; nothing was sent.
    Declined,
    Failed(TransportError),
}

/// Deletes one employee after an explicit confirmation.
pub struct DeleteEmployee {
    transport: Arc<dyn EmployeeTransportPort>,
    notifier: Arc<dyn NotificationPort>,
}

impl DeleteEmployee {
    pub fn new(
        transport: Arc<dyn EmployeeTransportPort>,
        notifier: Arc<dyn NotificationPort>,
    ) -> Self {
        Self {
            transport,
            notifier,
        }
    }

    #[tracing::instrument(name = "usecase.delete_employee.execute", skip(self), fields(employee_id = %id))]
    pub async fn execute(&self, id: &EmployeeId) -> DeleteOutcome {
        let choice = self
            .notifier
            .notify(Notice::confirm(
                "Are you sure?",
                "Once deleted, you will not be able to recover this record!",
            ))
            .await;

        if !choice.is_confirmed() {
            info!("employee delete declined");
            self.notifier
                .notify(Notice::info("Cancelled", "Record not deleted"))
                .await;
            return DeleteOutcome::Declined;
        }

        match self.transport.delete_record(id).await {
            Ok(()) => {
                info!("employee deleted");
                self.notifier
                    .notify(Notice::success("Deleted!", "Record has been deleted."))
                    .await;
                DeleteOutcome::Deleted
            }
            Err(err) => {
                warn!(error = %err, "employee delete failed");
                self.notifier
                    .notify(Notice::failure(
                        "Error!",
                        "There was an error deleting the record.",
                    ))
                    .await;
                DeleteOutcome::Failed(err)
            }
        }
    }
}
