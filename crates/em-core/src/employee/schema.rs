//! Declarative description of the employee form.

use serde::{Deserialize, Serialize};

use super::FieldId;

/// Input style of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    MultiLine,
    Date,
    Email,
    Phone,
    /// Value must come from the schema's option set for the field.
    Select,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: FieldId,
    pub kind: FieldKind,
    pub required: bool,
}

/// Option sets for selector fields.
///
/// Injected into the schema so the lists can come from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOptions {
    pub departments: Vec<String>,
    pub genders: Vec<String>,
    pub blood_groups: Vec<String>,
}

impl Default for FieldOptions {
    fn default() -> Self {
        fn owned(values: &[&str]) -> Vec<String> {
            values.iter().map(|v| v.to_string()).collect()
        }

        Self {
            departments: owned(&["IT", "Accounts", "Sales", "Marketing"]),
            genders: owned(&["Female", "Male", "Other"]),
            blood_groups: owned(&["A+", "B+", "AB+", "A-", "B-", "AB-", "O+", "O-"]),
        }
    }
}

const SPECS: [FieldSpec; 9] = [
    FieldSpec {
        field: FieldId::EmployeeName,
        kind: FieldKind::Text,
        required: true,
    },
    FieldSpec {
        field: FieldId::Dob,
        kind: FieldKind::Date,
        required: true,
    },
    FieldSpec {
        field: FieldId::Email,
        kind: FieldKind::Email,
        required: true,
    },
    FieldSpec {
        field: FieldId::MobileNumber,
        kind: FieldKind::Phone,
        required: true,
    },
    FieldSpec {
        field: FieldId::Department,
        kind: FieldKind::Select,
        required: true,
    },
    FieldSpec {
        field: FieldId::Designation,
        kind: FieldKind::Text,
        required: true,
    },
    FieldSpec {
        field: FieldId::BloodGroup,
        kind: FieldKind::Select,
        required: true,
    },
    FieldSpec {
        field: FieldId::Gender,
        kind: FieldKind::Select,
        required: true,
    },
    FieldSpec {
        field: FieldId::Address,
        kind: FieldKind::MultiLine,
        required: true,
    },
];

/// Field table plus injected option sets. Stateless.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldSchema {
    options: FieldOptions,
}

impl FieldSchema {
    pub fn new(options: FieldOptions) -> Self {
        Self { options }
    }

    /// Field specs in form order.
    pub fn specs(&self) -> &'static [FieldSpec] {
        &SPECS
    }

    pub fn spec(&self, field: FieldId) -> FieldSpec {
        // SPECS covers every FieldId variant.
        SPECS
            .iter()
            .copied()
            .find(|spec| spec.field == field)
            .unwrap_or(FieldSpec {
                field,
                kind: FieldKind::Text,
                required: true,
            })
    }

    /// Ordered allowed values for selector fields, `None` for free-form fields.
    pub fn options_for(&self, field: FieldId) -> Option<&[String]> {
        match field {
            FieldId::Department => Some(&self.options.departments),
            FieldId::Gender => Some(&self.options.genders),
            FieldId::BloodGroup => Some(&self.options.blood_groups),
            _ => None,
        }
    }

    pub fn options(&self) -> &FieldOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_has_a_spec() {
        let schema = FieldSchema::default();
        for field in FieldId::ALL {
            assert!(schema.specs().iter().any(|spec| spec.field == field));
        }
        assert_eq!(schema.specs().len(), FieldId::ALL.len());
    }

    #[test]
    fn test_selector_fields_expose_options_in_order() {
        let schema = FieldSchema::default();
        assert_eq!(
            schema.options_for(FieldId::Department).unwrap(),
            ["IT", "Accounts", "Sales", "Marketing"]
        );
        assert_eq!(
            schema.options_for(FieldId::Gender).unwrap(),
            ["Female", "Male", "Other"]
        );
        assert_eq!(schema.options_for(FieldId::BloodGroup).unwrap().len(), 8);
        assert!(schema.options_for(FieldId::Email).is_none());
    }

    #[test]
    fn test_injected_options_replace_defaults() {
        let schema = FieldSchema::new(FieldOptions {
            departments: vec!["R&D".to_string()],
            ..FieldOptions::default()
        });
        assert_eq!(schema.options_for(FieldId::Department).unwrap(), ["R&D"]);
        assert_eq!(schema.spec(FieldId::Department).kind, FieldKind::Select);
    }
}
