//! Form state machine.
//!
//! Defines a pure transition function for the Add/Edit employee form:
//! `(state, event) -> (state, actions)`. Network calls, prompts and
//! navigation are returned as [`FormAction`]s for the caller to execute.

use crate::employee::FieldSchema;
use crate::ports::TransportError;

use super::{FormAction, FormEvent, FormMode, FormPhase, FormState, Notice, Route};

/// Pure form state machine bound to a field schema.
#[derive(Debug, Clone, Default)]
pub struct FormStateMachine {
    schema: FieldSchema,
}

impl FormStateMachine {
    pub fn new(schema: FieldSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    /// Initial state for a freshly mounted form.
    ///
    /// The create flow starts empty and editable; the edit flow starts
    /// loading and asks for the record.
    pub fn init(&self, mode: FormMode) -> (FormState, Vec<FormAction>) {
        match mode {
            FormMode::Create => (
                FormState::fresh(&self.schema, FormMode::Create, FormPhase::Editing),
                Vec::new(),
            ),
            FormMode::Edit { id } => (
                FormState::fresh(
                    &self.schema,
                    FormMode::Edit { id: id.clone() },
                    FormPhase::Loading,
                ),
                vec![FormAction::FetchRecord { id }],
            ),
        }
    }

    pub fn transition(&self, state: FormState, event: FormEvent) -> (FormState, Vec<FormAction>) {
        let mut state = state;
        match (state.phase(), event) {
            // ===== Record loader =====
            (FormPhase::Loading, FormEvent::Loaded { draft }) => {
                state.hydrate(&self.schema, draft);
                state.set_phase(FormPhase::Editing);
                (state, Vec::new())
            }
            (FormPhase::Loading, FormEvent::LoadFailed { error }) => {
                state.set_phase(FormPhase::LoadFailed);
                let notice = load_failure_notice(&error);
                (state, vec![FormAction::Notify(notice)])
            }

            // ===== User input =====
            (FormPhase::Editing, FormEvent::FieldChanged { field, value }) => {
                state.set_field(&self.schema, field, value);
                (state, Vec::new())
            }
            (FormPhase::Editing, FormEvent::Submit) => {
                state.revalidate(&self.schema);
                if !state.is_valid() {
                    state.touch_all();
                    return (state, Vec::new());
                }
                let draft = state.values().clone();
                let action = match state.mode() {
                    FormMode::Create => FormAction::CreateRecord { draft },
                    FormMode::Edit { id } => FormAction::UpdateRecord {
                        id: id.clone(),
                        draft,
                    },
                };
                state.set_phase(FormPhase::Submitting);
                (state, vec![action])
            }
            (FormPhase::Editing, FormEvent::Reset) => {
                state.reset(&self.schema);
                (state, Vec::new())
            }
            (FormPhase::Editing, FormEvent::AddAnotherDeclined)
                if *state.mode() == FormMode::Create =>
            {
                (state, vec![FormAction::Navigate(Route::EmployeeList)])
            }
            (phase, FormEvent::Cancel) if phase != FormPhase::Submitting => {
                let route = state.mode().cancel_route();
                (state, vec![FormAction::Navigate(route)])
            }

            // ===== Submission pipeline =====
            (FormPhase::Submitting, FormEvent::SubmitSucceeded { .. }) => match state.mode() {
                FormMode::Create => {
                    let (fresh, _) = self.init(FormMode::Create);
                    (fresh, vec![FormAction::OfferAddAnother])
                }
                FormMode::Edit { .. } => {
                    state.set_phase(FormPhase::SubmitSucceeded);
                    (
                        state,
                        vec![
                            FormAction::Notify(Notice::success(
                                "Details Updated!",
                                "Employee details have been successfully updated.",
                            )),
                            FormAction::Navigate(Route::EmployeeList),
                        ],
                    )
                }
            },
            (FormPhase::Submitting, FormEvent::SubmitFailed { reason }) => {
                state.set_phase(FormPhase::Editing);
                let notice = Notice::failure(
                    "Error!",
                    format!("There was an error saving the record: {reason}"),
                );
                (state, vec![FormAction::Notify(notice)])
            }

            (_phase, _event) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(phase = ?_phase, event = ?_event, "form event ignored");
                (state, Vec::new())
            }
        }
    }
}

fn load_failure_notice(error: &TransportError) -> Notice {
    match error {
        TransportError::NotFound(id) => Notice::failure(
            "Not found",
            format!("Employee {id} does not exist or was deleted."),
        ),
        other => Notice::failure(
            "Error!",
            format!("There was an error loading the employee: {other}"),
        ),
    }
}
