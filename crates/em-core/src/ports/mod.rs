//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the outer layers
//! (HTTP transport, terminal shell). The core never talks to the network or
//! the user directly.

pub mod errors;
pub mod navigation;
pub mod notification;
pub mod transport;

pub use errors::TransportError;
pub use navigation::NavigationPort;
pub use notification::{NotificationPort, UserChoice};
pub use transport::EmployeeTransportPort;
