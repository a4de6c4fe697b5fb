use serde::{Deserialize, Serialize};

use crate::ids::EmployeeId;

/// Employee as stored by the backend.
///
/// Wire format is a JSON object keyed by camelCase field names. The backend
/// primary key arrives as `_id`; `id` is accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeRecord {
    #[serde(alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,
    pub employee_name: String,
    pub dob: String,
    pub email: String,
    pub mobile_number: String,
    pub department: String,
    pub designation: String,
    pub gender: String,
    pub blood_group: String,
    pub address: String,
}

impl EmployeeRecord {
    pub fn from_draft(id: Option<EmployeeId>, draft: EmployeeDraft) -> Self {
        Self {
            id,
            employee_name: draft.employee_name,
            dob: draft.dob,
            email: draft.email,
            mobile_number: draft.mobile_number,
            department: draft.department,
            designation: draft.designation,
            gender: draft.gender,
            blood_group: draft.blood_group,
            address: draft.address,
        }
    }

    /// Splits the record into its identifier and editable fields.
    pub fn into_parts(self) -> (Option<EmployeeId>, EmployeeDraft) {
        let draft = EmployeeDraft {
            employee_name: self.employee_name,
            dob: self.dob,
            email: self.email,
            mobile_number: self.mobile_number,
            department: self.department,
            designation: self.designation,
            gender: self.gender,
            blood_group: self.blood_group,
            address: self.address,
        };
        (self.id, draft)
    }
}

/// The editable field set, as typed by the user.
///
/// Serializes to exactly the create/update request body: the nine field
/// names, no identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeDraft {
    pub employee_name: String,
    pub dob: String,
    pub email: String,
    pub mobile_number: String,
    pub department: String,
    pub designation: String,
    pub gender: String,
    pub blood_group: String,
    pub address: String,
}

impl EmployeeDraft {
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_reads_backend_primary_key() {
        let record: EmployeeRecord = serde_json::from_value(json!({
            "_id": "65f1c0a2",
            "employeeName": "Jane Doe",
            "dob": "1990-01-01T00:00:00.000Z",
            "email": "jane@x.com",
            "mobileNumber": "9876543210",
            "department": "IT",
            "designation": "Engineer",
            "gender": "Female",
            "bloodGroup": "O+",
            "address": "1 Main St",
            "__v": 0
        }))
        .unwrap();

        assert_eq!(record.id, Some(EmployeeId::new("65f1c0a2")));
        assert_eq!(record.blood_group, "O+");
    }

    #[test]
    fn test_draft_payload_has_no_identifier() {
        let record = EmployeeRecord {
            id: Some(EmployeeId::new("abc")),
            employee_name: "Jane Doe".into(),
            ..Default::default()
        };
        let (id, draft) = record.into_parts();
        assert_eq!(id, Some(EmployeeId::new("abc")));

        let value = serde_json::to_value(&draft).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 9);
        assert!(!object.contains_key("id"));
        assert_eq!(object["employeeName"], "Jane Doe");
    }

    #[test]
    fn test_missing_fields_decode_as_empty() {
        let record: EmployeeRecord = serde_json::from_value(json!({ "id": "1" })).unwrap();
        assert_eq!(record.id, Some(EmployeeId::new("1")));
        assert_eq!(record.email, "");
    }
}
