//! Add/Edit employee form use cases.
//!
//! This module exposes the form orchestrator together with the record
//! loader and submission pipeline it drives.

mod context;
pub mod load_employee;
pub mod orchestrator;
pub mod submit_employee;

pub use load_employee::{LoadEmployee, LoadError};
pub use orchestrator::{EmployeeFormOrchestrator, FormError};
pub use submit_employee::{SubmitEmployee, SubmitError};
