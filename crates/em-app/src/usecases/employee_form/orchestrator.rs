//! Employee form orchestrator.
//!
//! This module coordinates the form state machine and its side effects:
//! the record loader, the submission pipeline, notices and navigation.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, info_span, warn, Instrument};

use em_core::employee::{EmployeeRecord, FieldId, FieldSchema};
use em_core::form::{FormAction, FormEvent, FormMode, FormState, FormStateMachine, Notice};
use em_core::ports::{NavigationPort, NotificationPort};

use super::context::FormContext;
use super::{LoadEmployee, SubmitEmployee, SubmitError};

/// Errors produced by the form orchestrator.
///
/// Network and validation failures are not errors here: they become state
/// transitions and notices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("form is no longer mounted")]
    Unmounted,
}

/// Orchestrator that drives one mounted Add/Edit form.
pub struct EmployeeFormOrchestrator {
    context: Arc<FormContext>,
    machine: FormStateMachine,
    /// Actions produced by `init`, run by [`EmployeeFormOrchestrator::start`].
    pending_init: Mutex<Vec<FormAction>>,

    load_employee: Arc<LoadEmployee>,
    submit_employee: Arc<SubmitEmployee>,
    navigation: Arc<dyn NavigationPort>,
    notifier: Arc<dyn NotificationPort>,
}

impl EmployeeFormOrchestrator {
    /// Mounts a form for `mode`. Call [`start`](Self::start) to run the
    /// edit-flow fetch.
    pub fn new(
        mode: FormMode,
        machine: FormStateMachine,
        load_employee: Arc<LoadEmployee>,
        submit_employee: Arc<SubmitEmployee>,
        navigation: Arc<dyn NavigationPort>,
        notifier: Arc<dyn NotificationPort>,
    ) -> Self {
        let (state, actions) = machine.init(mode);
        Self {
            context: FormContext::new(state).arc(),
            machine,
            pending_init: Mutex::new(actions),
            load_employee,
            submit_employee,
            navigation,
            notifier,
        }
    }

    /// Runs the mount-time actions (the record fetch for the edit flow) and
    /// returns the resulting state. Calling it again is a no-op.
    pub async fn start(&self) -> Result<FormState, FormError> {
        let actions = std::mem::take(&mut *self.pending_init.lock().await);
        let span = info_span!("usecase.employee_form.start", actions = actions.len());
        async {
            let follow_ups = self.execute_actions(actions).await?;
            self.drain(follow_ups.into()).await
        }
        .instrument(span)
        .await
    }

    pub async fn change_field(&self, field: FieldId, value: String) -> Result<FormState, FormError> {
        self.dispatch(FormEvent::FieldChanged { field, value }).await
    }

    pub async fn submit(&self) -> Result<FormState, FormError> {
        self.dispatch(FormEvent::Submit).await
    }

    pub async fn reset(&self) -> Result<FormState, FormError> {
        self.dispatch(FormEvent::Reset).await
    }

    pub async fn cancel(&self) -> Result<FormState, FormError> {
        self.dispatch(FormEvent::Cancel).await
    }

    pub async fn state(&self) -> FormState {
        self.context.get_state().await
    }

    pub fn schema(&self) -> &FieldSchema {
        self.machine.schema()
    }

    /// Discards the form. Pending load/submit results are dropped and every
    /// later call fails with [`FormError::Unmounted`].
    pub fn unmount(&self) {
        info!("employee form unmounted");
        self.context.unmount();
    }

    pub fn is_mounted(&self) -> bool {
        self.context.is_mounted()
    }

    pub async fn dispatch(&self, event: FormEvent) -> Result<FormState, FormError> {
        let span = info_span!("usecase.employee_form.dispatch", event = ?event);
        self.drain(VecDeque::from([event])).instrument(span).await
    }

    async fn drain(&self, mut pending: VecDeque<FormEvent>) -> Result<FormState, FormError> {
        while let Some(event) = pending.pop_front() {
            self.ensure_mounted()?;
            let actions = self.apply(event).await;
            let follow_ups = self.execute_actions(actions).await?;
            pending.extend(follow_ups);
        }
        self.ensure_mounted()?;
        Ok(self.context.get_state().await)
    }

    async fn apply(&self, event: FormEvent) -> Vec<FormAction> {
        let event_name = format!("{:?}", event);
        self.context
            .update(|state| {
                let from = state.phase();
                let (next, actions) = self.machine.transition(state.clone(), event);
                info!(from = ?from, to = ?next.phase(), event = %event_name, "form state transition");
                *state = next;
                actions
            })
            .await
    }

    async fn execute_actions(&self, actions: Vec<FormAction>) -> Result<Vec<FormEvent>, FormError> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "form executing action");
            match action {
                FormAction::FetchRecord { id } => {
                    let event = match self.until_unmounted(self.load_employee.execute(&id)).await? {
                        Ok(draft) => FormEvent::Loaded { draft },
                        Err(err) => FormEvent::LoadFailed {
                            error: err.into_transport_error(),
                        },
                    };
                    follow_up_events.push(event);
                }
                FormAction::CreateRecord { draft } => {
                    let mode = FormMode::Create;
                    let result = self
                        .until_unmounted(self.submit_employee.execute(&mode, &draft))
                        .await?;
                    follow_up_events.push(submit_result_event(result));
                }
                FormAction::UpdateRecord { id, draft } => {
                    let mode = FormMode::Edit { id };
                    let result = self
                        .until_unmounted(self.submit_employee.execute(&mode, &draft))
                        .await?;
                    follow_up_events.push(submit_result_event(result));
                }
                FormAction::Notify(notice) => {
                    self.notifier.notify(notice).await;
                }
                FormAction::OfferAddAnother => {
                    let choice = self
                        .notifier
                        .notify(Notice::confirm("Employee Details Added!", "Add another one?"))
                        .await;
                    if choice.is_confirmed() {
                        self.notifier
                            .notify(Notice::success("Great!", "You chose to add another employee!"))
                            .await;
                    } else {
                        follow_up_events.push(FormEvent::AddAnotherDeclined);
                    }
                }
                FormAction::Navigate(route) => {
                    info!(route = %route, "form navigating");
                    self.navigation.go_to(route);
                }
            }
        }
        Ok(follow_up_events)
    }

    /// Awaits `fut` unless the form is unmounted first.
    async fn until_unmounted<F: Future>(&self, fut: F) -> Result<F::Output, FormError> {
        let token = self.context.unmounted_token();
        let output = tokio::select! {
            biased;
            _ = token.cancelled() => None,
            output = fut => Some(output),
        };
        match output {
            Some(output) if self.is_mounted() => Ok(output),
            _ => {
                warn!("form unmounted while a request was pending; result discarded");
                Err(FormError::Unmounted)
            }
        }
    }

    fn ensure_mounted(&self) -> Result<(), FormError> {
        if self.is_mounted() {
            Ok(())
        } else {
            Err(FormError::Unmounted)
        }
    }
}

fn submit_result_event(result: Result<EmployeeRecord, SubmitError>) -> FormEvent {
    match result {
        Ok(record) => FormEvent::SubmitSucceeded { record },
        Err(err) => FormEvent::SubmitFailed {
            reason: err.to_string(),
        },
    }
}
