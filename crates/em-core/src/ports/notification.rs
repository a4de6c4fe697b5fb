use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::form::Notice;

/// What the user did with a notice.
///
/// Only confirm prompts produce `Confirmed`/`Declined`; informational notices
/// resolve to `Acknowledged`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserChoice {
    Acknowledged,
    Confirmed,
    Declined,
}

impl UserChoice {
    pub fn is_confirmed(self) -> bool {
        self == UserChoice::Confirmed
    }
}

/// Toasts and confirmation prompts.
#[async_trait]
pub trait NotificationPort: Send + Sync {
    async fn notify(&self, notice: Notice) -> UserChoice;
}
