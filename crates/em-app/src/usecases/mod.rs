//! Business logic use cases
//!
//! Form flow (Add / Edit):
//!
//! ```text
//! LoadEmployee (edit only) → FormStateMachine → SubmitEmployee → transport
//!                      ↘ EmployeeFormOrchestrator executes the actions ↙
//! ```
//!
//! Listing flow: ListEmployees → DeleteEmployee / ExportEmployees.

pub mod employee_form;
pub mod employees;

pub use employee_form::{
    EmployeeFormOrchestrator, FormError, LoadEmployee, LoadError, SubmitEmployee, SubmitError,
};
pub use employees::{DeleteEmployee, DeleteOutcome, ExportEmployees, ListEmployees};
