use std::sync::Arc;

use tracing::info;

use em_core::config::ExportConfig;
use em_core::listing::to_delimited;
use em_core::ports::{EmployeeTransportPort, TransportError};

use super::ListEmployees;

/// Renders the full listing as delimited text, in display order.
///
/// Writing the file is left to the shell.
pub struct ExportEmployees {
    listing: ListEmployees,
    config: ExportConfig,
}

impl ExportEmployees {
    pub fn new(transport: Arc<dyn EmployeeTransportPort>, config: ExportConfig) -> Self {
        Self {
            listing: ListEmployees::new(transport),
            config,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.config.file_name
    }

    #[tracing::instrument(name = "usecase.export_employees.execute", skip(self))]
    pub async fn execute(&self) -> Result<String, TransportError> {
        let records = self.listing.fetch_sorted().await?;
        info!(rows = records.len(), "employee export rendered");
        Ok(to_delimited(&records, self.config.delimiter))
    }
}
