//! # em-core
//!
//! Core domain models and form logic for the employee records manager.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the employee model, the field schema and validator, the form state machine,
//! listing/export helpers and the port traits implemented by outer layers.

pub mod config;
pub mod employee;
pub mod form;
pub mod ids;
pub mod listing;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use employee::{
    EmployeeDraft, EmployeeRecord, FieldErrors, FieldId, FieldKind, FieldOptions, FieldSchema,
};
pub use form::{
    FormAction, FormEvent, FormMode, FormPhase, FormState, FormStateMachine, Notice, NoticeKind,
    Route,
};
pub use ids::EmployeeId;
