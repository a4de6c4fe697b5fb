//! Employee records manager application layer
//!
//! This crate contains the use cases: the Add/Edit form orchestrator and the
//! list, delete and export flows. It talks to the outside world only through
//! `em-core` ports.

pub mod deps;
pub mod usecases;

#[cfg(test)]
pub(crate) mod test_support;

pub use deps::{App, AppDeps};
pub use usecases::{
    DeleteEmployee, DeleteOutcome, EmployeeFormOrchestrator, ExportEmployees, FormError,
    ListEmployees, LoadEmployee, LoadError, SubmitEmployee, SubmitError,
};
