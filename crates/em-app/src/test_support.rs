//! `mockall` doubles for the ports, shared by the use-case unit tests.

use async_trait::async_trait;
use mockall::mock;

use em_core::employee::{EmployeeDraft, EmployeeRecord};
use em_core::form::{Notice, Route};
use em_core::ids::EmployeeId;
use em_core::ports::{
    EmployeeTransportPort, NavigationPort, NotificationPort, TransportError, UserChoice,
};

mock! {
    pub Transport {}

    #[async_trait]
    impl EmployeeTransportPort for Transport {
        async fn create_record(&self, draft: &EmployeeDraft) -> Result<EmployeeRecord, TransportError>;
        async fn update_record(&self, id: &EmployeeId, draft: &EmployeeDraft) -> Result<EmployeeRecord, TransportError>;
        async fn fetch_record(&self, id: &EmployeeId) -> Result<EmployeeRecord, TransportError>;
        async fn fetch_all(&self) -> Result<Vec<EmployeeRecord>, TransportError>;
        async fn delete_record(&self, id: &EmployeeId) -> Result<(), TransportError>;
    }
}

mock! {
    pub Notifier {}

    #[async_trait]
    impl NotificationPort for Notifier {
        async fn notify(&self, notice: Notice) -> UserChoice;
    }
}

mock! {
    pub Navigation {}

    impl NavigationPort for Navigation {
        fn go_to(&self, route: Route);
    }
}

pub fn record(id: &str, name: &str) -> EmployeeRecord {
    EmployeeRecord {
        id: Some(EmployeeId::new(id)),
        employee_name: name.to_string(),
        dob: "1990-01-01T00:00:00.000Z".to_string(),
        email: format!("{}@x.com", name.to_lowercase().replace(' ', ".")),
        mobile_number: "9876543210".to_string(),
        department: "IT".to_string(),
        designation: "Engineer".to_string(),
        gender: "Female".to_string(),
        blood_group: "O+".to_string(),
        address: "1 Main St".to_string(),
    }
}
