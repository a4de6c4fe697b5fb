//! Listing screen use cases: paged listing, delete with confirmation and
//! delimited export.

pub mod delete_employee;
pub mod export_employees;
pub mod list_employees;

pub use delete_employee::{DeleteEmployee, DeleteOutcome};
pub use export_employees::ExportEmployees;
pub use list_employees::ListEmployees;
