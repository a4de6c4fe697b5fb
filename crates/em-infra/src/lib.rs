//! Infrastructure adapters for the employee records manager.
//!
//! - [`http`]: the REST transport behind `EmployeeTransportPort`
//! - [`config`]: TOML configuration loading

pub mod config;
pub mod http;

pub use config::load_config;
pub use http::HttpEmployeeTransport;
