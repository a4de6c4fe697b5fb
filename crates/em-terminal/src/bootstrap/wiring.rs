//! Dependency wiring.
//!
//! The only place that knows both the concrete adapters and `em-app`. It
//! assembles; it does not decide.

use std::sync::Arc;

use em_app::{App, AppDeps};
use em_core::config::AppConfig;
use em_infra::HttpEmployeeTransport;

use crate::adapters::{Console, TerminalNavigator, TerminalNotifier};

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("HTTP transport initialization failed: {0}")]
    TransportInit(String),
}

/// The assembled application plus the shell handles the binary drives.
pub struct WiredApp {
    pub app: App,
    pub console: Arc<Console>,
    pub navigator: Arc<TerminalNavigator>,
}

pub fn wire_app(config: AppConfig, console: Arc<Console>) -> WiringResult<WiredApp> {
    let transport = HttpEmployeeTransport::new(&config.api)
        .map_err(|e| WiringError::TransportInit(e.to_string()))?;
    tracing::debug!(base_url = %transport.base_url(), "HTTP transport ready");

    let navigator = Arc::new(TerminalNavigator::new());
    let notifier = Arc::new(TerminalNotifier::new(console.clone()));

    let app = App::new(AppDeps {
        transport: Arc::new(transport),
        navigation: navigator.clone(),
        notifier,
        config,
    });

    Ok(WiredApp {
        app,
        console,
        navigator,
    })
}
