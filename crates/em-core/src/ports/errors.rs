use thiserror::Error;

/// Failure reported by the employee transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("employee not found: {0}")]
    NotFound(String),

    /// The server answered with a non-success status.
    #[error("server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request never completed or the response could not be decoded.
    #[error("transport error: {0}")]
    Transport(String),
}

impl TransportError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TransportError::NotFound(_))
    }
}
