//! Editable field identifiers.
//!
//! `FieldId` is the explicit mapping from a field to its slot on
//! [`EmployeeDraft`], replacing name-keyed access with a getter/setter pair.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::EmployeeDraft;

/// One of the nine editable employee attributes.
///
/// The identifier is deliberately absent: it is assigned by the backend and
/// never edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    EmployeeName,
    Dob,
    Email,
    MobileNumber,
    Department,
    Designation,
    Gender,
    BloodGroup,
    Address,
}

impl FieldId {
    /// All editable fields in form order.
    pub const ALL: [FieldId; 9] = [
        FieldId::EmployeeName,
        FieldId::Dob,
        FieldId::Email,
        FieldId::MobileNumber,
        FieldId::Department,
        FieldId::Designation,
        FieldId::BloodGroup,
        FieldId::Gender,
        FieldId::Address,
    ];

    /// Key used in the JSON wire format.
    pub fn wire_name(self) -> &'static str {
        match self {
            FieldId::EmployeeName => "employeeName",
            FieldId::Dob => "dob",
            FieldId::Email => "email",
            FieldId::MobileNumber => "mobileNumber",
            FieldId::Department => "department",
            FieldId::Designation => "designation",
            FieldId::Gender => "gender",
            FieldId::BloodGroup => "bloodGroup",
            FieldId::Address => "address",
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::EmployeeName => "Employee Name",
            FieldId::Dob => "Date of Birth",
            FieldId::Email => "Email",
            FieldId::MobileNumber => "Mobile No",
            FieldId::Department => "Department",
            FieldId::Designation => "Designation",
            FieldId::Gender => "Gender",
            FieldId::BloodGroup => "Blood Group",
            FieldId::Address => "Address",
        }
    }

    pub fn get(self, draft: &EmployeeDraft) -> &str {
        match self {
            FieldId::EmployeeName => &draft.employee_name,
            FieldId::Dob => &draft.dob,
            FieldId::Email => &draft.email,
            FieldId::MobileNumber => &draft.mobile_number,
            FieldId::Department => &draft.department,
            FieldId::Designation => &draft.designation,
            FieldId::Gender => &draft.gender,
            FieldId::BloodGroup => &draft.blood_group,
            FieldId::Address => &draft.address,
        }
    }

    pub fn set(self, draft: &mut EmployeeDraft, value: String) {
        let slot = match self {
            FieldId::EmployeeName => &mut draft.employee_name,
            FieldId::Dob => &mut draft.dob,
            FieldId::Email => &mut draft.email,
            FieldId::MobileNumber => &mut draft.mobile_number,
            FieldId::Department => &mut draft.department,
            FieldId::Designation => &mut draft.designation,
            FieldId::Gender => &mut draft.gender,
            FieldId::BloodGroup => &mut draft.blood_group,
            FieldId::Address => &mut draft.address,
        };
        *slot = value;
    }
}

impl Display for FieldId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown employee field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldId {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.wire_name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_touches_only_that_slot() {
        let mut draft = EmployeeDraft::default();
        FieldId::MobileNumber.set(&mut draft, "9876543210".to_string());

        assert_eq!(FieldId::MobileNumber.get(&draft), "9876543210");
        for field in FieldId::ALL {
            if field != FieldId::MobileNumber {
                assert_eq!(field.get(&draft), "", "{field} should stay empty");
            }
        }
    }

    #[test]
    fn test_wire_names_parse_back() {
        for field in FieldId::ALL {
            assert_eq!(field.wire_name().parse::<FieldId>().unwrap(), field);
        }
        assert!("id".parse::<FieldId>().is_err());
    }

    #[test]
    fn test_serde_name_matches_wire_name() {
        for field in FieldId::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.wire_name()));
        }
    }
}
