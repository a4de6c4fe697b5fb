//! Employee domain: record model, editable field set, schema and validation.

pub mod dob;
pub mod field;
pub mod record;
pub mod schema;
pub mod validation;

pub use dob::normalize_dob;
pub use field::{FieldId, UnknownField};
pub use record::{EmployeeDraft, EmployeeRecord};
pub use schema::{FieldKind, FieldOptions, FieldSchema, FieldSpec};
pub use validation::{validate, validate_field, FieldErrors};
