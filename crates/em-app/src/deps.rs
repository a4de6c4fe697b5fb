//! Application dependency grouping.
//!
//! `AppDeps` holds every port the use cases need, so the shell wires them
//! once and then asks [`App`] for ready-made use cases.

use std::sync::Arc;

use em_core::config::AppConfig;
use em_core::employee::FieldSchema;
use em_core::form::{FormMode, FormStateMachine};
use em_core::ports::{EmployeeTransportPort, NavigationPort, NotificationPort};

use crate::usecases::{
    DeleteEmployee, EmployeeFormOrchestrator, ExportEmployees, ListEmployees, LoadEmployee,
    SubmitEmployee,
};

/// Ports and settings supplied by the shell.
pub struct AppDeps {
    pub transport: Arc<dyn EmployeeTransportPort>,
    pub navigation: Arc<dyn NavigationPort>,
    pub notifier: Arc<dyn NotificationPort>,
    pub config: AppConfig,
}

/// Use-case accessor.
pub struct App {
    deps: AppDeps,
    schema: FieldSchema,
}

impl App {
    pub fn new(deps: AppDeps) -> Self {
        let schema = FieldSchema::new(deps.config.form.clone());
        Self { deps, schema }
    }

    pub fn config(&self) -> &AppConfig {
        &self.deps.config
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    pub fn list_employees(&self) -> ListEmployees {
        ListEmployees::new(self.deps.transport.clone())
    }

    pub fn delete_employee(&self) -> DeleteEmployee {
        DeleteEmployee::new(self.deps.transport.clone(), self.deps.notifier.clone())
    }

    pub fn export_employees(&self) -> ExportEmployees {
        ExportEmployees::new(self.deps.transport.clone(), self.deps.config.export.clone())
    }

    /// Mounts a new Add (`FormMode::Create`) or Edit form.
    pub fn employee_form(&self, mode: FormMode) -> EmployeeFormOrchestrator {
        EmployeeFormOrchestrator::new(
            mode,
            FormStateMachine::new(self.schema.clone()),
            Arc::new(LoadEmployee::new(self.deps.transport.clone())),
            Arc::new(SubmitEmployee::new(
                self.deps.transport.clone(),
                self.schema.clone(),
            )),
            self.deps.navigation.clone(),
            self.deps.notifier.clone(),
        )
    }
}
