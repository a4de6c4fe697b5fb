//! Field-level validation.
//!
//! [`validate`] is pure: the same draft always yields the same errors, and
//! only fields currently violating a rule appear in the result.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::dob::is_calendar_date;
use super::{EmployeeDraft, FieldId, FieldKind, FieldSchema};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$"#,
    )
    .expect("email pattern is valid")
});

pub const MOBILE_NUMBER_LEN: usize = 10;

/// Mapping field → human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FieldId, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: FieldId, message: String) {
        self.0.insert(field, message);
    }
}

fn required_message(field: FieldId) -> String {
    let name = match field {
        FieldId::EmployeeName => "Name",
        other => other.label(),
    };
    format!("{name} is required")
}

/// Validates every field of `draft` against `schema`.
pub fn validate(schema: &FieldSchema, draft: &EmployeeDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for spec in schema.specs() {
        if let Some(message) = validate_field(schema, spec.field, spec.field.get(draft)) {
            errors.insert(spec.field, message);
        }
    }
    errors
}

/// Validates a single field value. Returns the first violated rule's message.
pub fn validate_field(schema: &FieldSchema, field: FieldId, value: &str) -> Option<String> {
    let spec = schema.spec(field);
    if value.trim().is_empty() {
        return spec.required.then(|| required_message(field));
    }

    match spec.kind {
        FieldKind::Email if !EMAIL_RE.is_match(value) => Some("Invalid email".to_string()),
        FieldKind::Phone => {
            if !value.chars().all(|c| c.is_ascii_digit()) {
                Some("Must be only digits".to_string())
            } else if value.len() != MOBILE_NUMBER_LEN {
                Some(format!(
                    "Mobile No must be exactly {MOBILE_NUMBER_LEN} digits"
                ))
            } else {
                None
            }
        }
        FieldKind::Date if !is_calendar_date(value) => Some(format!(
            "{} must be a valid date (YYYY-MM-DD)",
            field.label()
        )),
        FieldKind::Select => match schema.options_for(field) {
            Some(options) if !options.is_empty() && !options.iter().any(|o| o == value) => {
                Some(format!("{} must be one of: {}", field.label(), options.join(", ")))
            }
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> EmployeeDraft {
        EmployeeDraft {
            employee_name: "Jane Doe".into(),
            dob: "1990-01-01".into(),
            email: "jane@x.com".into(),
            mobile_number: "9876543210".into(),
            department: "IT".into(),
            designation: "Engineer".into(),
            gender: "Female".into(),
            blood_group: "O+".into(),
            address: "1 Main St".into(),
        }
    }

    #[test]
    fn test_complete_draft_has_no_errors() {
        let errors = validate(&FieldSchema::default(), &jane());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn test_each_empty_required_field_errors_alone() {
        let schema = FieldSchema::default();
        for field in FieldId::ALL {
            let mut draft = jane();
            field.set(&mut draft, String::new());
            let errors = validate(&schema, &draft);
            assert_eq!(errors.len(), 1, "{field}: {errors:?}");
            assert!(!errors.get(field).unwrap().is_empty());
        }
    }

    #[test]
    fn test_blank_counts_as_empty() {
        let mut draft = jane();
        draft.designation = "   ".into();
        let errors = validate(&FieldSchema::default(), &draft);
        assert_eq!(errors.get(FieldId::Designation), Some("Designation is required"));
    }

    #[test]
    fn test_required_messages() {
        let errors = validate(&FieldSchema::default(), &EmployeeDraft::empty());
        assert_eq!(errors.len(), 9);
        assert_eq!(errors.get(FieldId::EmployeeName), Some("Name is required"));
        assert_eq!(errors.get(FieldId::Dob), Some("Date of Birth is required"));
        assert_eq!(errors.get(FieldId::MobileNumber), Some("Mobile No is required"));
        assert_eq!(errors.get(FieldId::BloodGroup), Some("Blood Group is required"));
    }

    #[test]
    fn test_mobile_number_rules() {
        let schema = FieldSchema::default();
        for bad in ["12345", "98765432100", "98765abc10", "+919876543", "987654321 "] {
            assert!(
                validate_field(&schema, FieldId::MobileNumber, bad).is_some(),
                "{bad:?} should fail"
            );
        }
        for good in ["9876543210", "0000000000", "1234567890"] {
            assert!(validate_field(&schema, FieldId::MobileNumber, good).is_none());
        }
        assert_eq!(
            validate_field(&schema, FieldId::MobileNumber, "12345").as_deref(),
            Some("Mobile No must be exactly 10 digits")
        );
        assert_eq!(
            validate_field(&schema, FieldId::MobileNumber, "12a45").as_deref(),
            Some("Must be only digits")
        );
    }

    #[test]
    fn test_email_rules() {
        let schema = FieldSchema::default();
        for good in ["jane@x.com", "first.last+tag@mail.example.org", "a_b@sub-domain.co"] {
            assert!(validate_field(&schema, FieldId::Email, good).is_none(), "{good}");
        }
        for bad in [
            "jane",
            "jane@",
            "@x.com",
            "jane@x",
            "jane x@x.com",
            "jane@@x.com",
            " jane@x.com ",
            "jane@x.com\t",
        ] {
            assert_eq!(
                validate_field(&schema, FieldId::Email, bad).as_deref(),
                Some("Invalid email"),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_dob_must_be_calendar_date() {
        let schema = FieldSchema::default();
        assert!(validate_field(&schema, FieldId::Dob, "2020-03-15").is_none());
        assert!(validate_field(&schema, FieldId::Dob, "2020-02-30").is_some());
        assert!(validate_field(&schema, FieldId::Dob, "15/03/2020").is_some());
    }

    #[test]
    fn test_dob_rejects_timestamps_and_padding() {
        let schema = FieldSchema::default();
        for bad in ["2020-03-15T10:00:00Z", "2020-03-15T10:00:00", " 2020-03-15 ", "2020-03-15\n"] {
            assert_eq!(
                validate_field(&schema, FieldId::Dob, bad).as_deref(),
                Some("Date of Birth must be a valid date (YYYY-MM-DD)"),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_selector_value_outside_options() {
        let schema = FieldSchema::default();
        assert_eq!(
            validate_field(&schema, FieldId::BloodGroup, "Z+").as_deref(),
            Some("Blood Group must be one of: A+, B+, AB+, A-, B-, AB-, O+, O-")
        );
        assert!(validate_field(&schema, FieldId::Gender, "Other").is_none());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let schema = FieldSchema::default();
        let mut draft = jane();
        draft.email = "broken".into();
        draft.mobile_number = "1".into();
        assert_eq!(validate(&schema, &draft), validate(&schema, &draft));
    }
}
