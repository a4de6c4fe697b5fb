//! Terminal shell for the employee records manager.
//!
//! Provides the console-backed notification and navigation adapters, the
//! interactive Add/Edit form driver, listing views and the bootstrap
//! (tracing, configuration, wiring) used by the binary.

pub mod adapters;
pub mod bootstrap;
pub mod form_driver;
pub mod views;

pub use adapters::{Console, TerminalNavigator, TerminalNotifier};
pub use form_driver::FormDriver;
