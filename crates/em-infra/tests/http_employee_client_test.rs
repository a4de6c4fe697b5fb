use std::time::Duration;

use mockito::{Matcher, Server};
use serde_json::json;

use em_core::employee::EmployeeDraft;
use em_core::ids::EmployeeId;
use em_core::ports::{EmployeeTransportPort, TransportError};
use em_infra::HttpEmployeeTransport;

fn transport(server: &Server) -> HttpEmployeeTransport {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    HttpEmployeeTransport::with_client(client, &format!("{}/api", server.url()))
}

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

#[tokio::test]
async fn create_posts_camel_case_payload_without_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/employees")
        .match_body(Matcher::Json(json!({
            "employeeName": "Jane Doe",
            "dob": "1990-01-01",
            "email": "jane@x.com",
            "mobileNumber": "9876543210",
            "department": "IT",
            "designation": "Engineer",
            "gender": "Female",
            "bloodGroup": "O+",
            "address": "1 Main St"
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "_id": "66a1",
                "employeeName": "Jane Doe",
                "dob": "1990-01-01T00:00:00.000Z",
                "email": "jane@x.com",
                "mobileNumber": "9876543210",
                "department": "IT",
                "designation": "Engineer",
                "gender": "Female",
                "bloodGroup": "O+",
                "address": "1 Main St"
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let record = transport(&server).create_record(&jane()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(record.id, Some(EmployeeId::new("66a1")));
    assert_eq!(record.employee_name, "Jane Doe");
}

#[tokio::test]
async fn update_falls_back_to_submitted_values_on_bare_ack() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/employees/42")
        .with_status(200)
        .with_body(r#"{"message":"Employee updated"}"#)
        .create_async()
        .await;

    let record = transport(&server)
        .update_record(&EmployeeId::new("42"), &jane())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(record.id, Some(EmployeeId::new("42")));
    assert_eq!(record.dob, "1990-01-01");
}

#[tokio::test]
async fn fetch_record_maps_404_to_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/employees/missing")
        .with_status(404)
        .with_body(r#"{"message":"Employee not found"}"#)
        .create_async()
        .await;

    let err = transport(&server)
        .fetch_record(&EmployeeId::new("missing"))
        .await
        .unwrap_err();

    assert_eq!(err, TransportError::NotFound("missing".into()));
}

#[tokio::test]
async fn fetch_all_decodes_records_with_either_id_key() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/employees")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                { "_id": "1", "employeeName": "Ann Lee" },
                { "id": "2", "employeeName": "Bo Kim" }
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let records = transport(&server).fetch_all().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, Some(EmployeeId::new("1")));
    assert_eq!(records[1].id, Some(EmployeeId::new("2")));
}

#[tokio::test]
async fn server_error_is_rejected_with_message() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/employees")
        .with_status(409)
        .with_body(r#"{"message":"Email already exists"}"#)
        .create_async()
        .await;

    let err = transport(&server).create_record(&jane()).await.unwrap_err();

    assert_eq!(
        err,
        TransportError::Rejected {
            status: 409,
            message: "Email already exists".into()
        }
    );
}

#[tokio::test]
async fn delete_hits_record_url_once() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/employees/42")
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    transport(&server)
        .delete_record(&EmployeeId::new("42"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn ids_with_path_characters_stay_in_one_segment() {
    let mut server = Server::new_async().await;
    let encoded = server
        .mock("DELETE", "/api/employees/a%2F..%2Fb")
        .with_status(204)
        .expect(1)
        .create_async()
        .await;
    let collection = server
        .mock("DELETE", Matcher::Regex(r"^/api/?(employees/?)?$".into()))
        .expect(0)
        .create_async()
        .await;

    let transport = transport(&server);
    transport
        .delete_record(&EmployeeId::new("a/../b"))
        .await
        .unwrap();
    let err = transport
        .delete_record(&EmployeeId::new(".."))
        .await
        .unwrap_err();

    assert_eq!(err, TransportError::NotFound("..".into()));
    encoded.assert_async().await;
    collection.assert_async().await;
}

#[tokio::test]
async fn malformed_listing_is_a_transport_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/employees")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let err = transport(&server).fetch_all().await.unwrap_err();
    assert!(matches!(err, TransportError::Transport(_)));
}
