pub mod employee_client;

pub use employee_client::HttpEmployeeTransport;
