use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use em_core::form::FormState;

/// Shared state of one mounted form.
///
/// The state lock is held only while a transition is applied, never across
/// a network call; that is what lets a second submit observe `Submitting`
/// and be rejected. `mounted` is cancelled on unmount so late results are
/// dropped instead of applied.
pub(crate) struct FormContext {
    state: Mutex<FormState>,
    mounted: CancellationToken,
}

impl FormContext {
    pub(crate) fn new(initial_state: FormState) -> Self {
        Self {
            state: Mutex::new(initial_state),
            mounted: CancellationToken::new(),
        }
    }

    pub(crate) fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub(crate) async fn get_state(&self) -> FormState {
        self.state.lock().await.clone()
    }

    /// Applies `f` to the state under the lock and returns its output.
    pub(crate) async fn update<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> R {
        let mut guard = self.state.lock().await;
        f(&mut guard)
    }

    pub(crate) fn unmount(&self) {
        self.mounted.cancel();
    }

    pub(crate) fn is_mounted(&self) -> bool {
        !self.mounted.is_cancelled()
    }

    pub(crate) fn unmounted_token(&self) -> &CancellationToken {
        &self.mounted
    }
}
