//! Interactive Add/Edit form on the terminal.
//!
//! Prompts every field, submits, then re-prompts only the fields whose
//! errors are visible. Typing `:reset` or `:cancel` at any prompt sends the
//! matching form event; end of input cancels. Pressing enter on a field
//! that already has a value keeps it.

use std::sync::Arc;

use anyhow::Context;
use tracing::debug;

use em_app::{EmployeeFormOrchestrator, FormError};
use em_core::employee::FieldId;
use em_core::form::{FormPhase, FormState};

use crate::adapters::{Console, TerminalNavigator};

const RESET_COMMAND: &str = ":reset";
const CANCEL_COMMAND: &str = ":cancel";

enum Input {
    Value(String),
    Keep,
    Reset,
    Cancel,
}

/// What happened to a pass over the fields.
enum Pass {
    Completed,
    Reset,
    Cancelled,
}

pub struct FormDriver {
    console: Arc<Console>,
    navigator: Arc<TerminalNavigator>,
}

impl FormDriver {
    pub fn new(console: Arc<Console>, navigator: Arc<TerminalNavigator>) -> Self {
        Self { console, navigator }
    }

    /// Runs the form until it navigates away. The form is unmounted on
    /// return.
    pub async fn run(&self, form: &EmployeeFormOrchestrator) {
        if let Err(err) = self.drive(form).await {
            debug!(error = %err, "form closed early");
        }
        form.unmount();
    }

    async fn drive(&self, form: &EmployeeFormOrchestrator) -> Result<(), FormError> {
        let visits_at_start = self.navigator.visits();
        let mut state = form.start().await?;
        let mut pending: Vec<FieldId> = FieldId::ALL.to_vec();

        loop {
            if self.navigator.visits() > visits_at_start {
                return Ok(());
            }

            match state.phase() {
                FormPhase::LoadFailed => {
                    form.cancel().await?;
                    return Ok(());
                }
                FormPhase::SubmitSucceeded => return Ok(()),
                FormPhase::Loading | FormPhase::Submitting => {
                    debug!(phase = ?state.phase(), "form busy; nothing to prompt");
                    return Ok(());
                }
                FormPhase::Editing => {}
            }

            match self.prompt_fields(form, &state, &pending).await? {
                Pass::Cancelled => {
                    form.cancel().await?;
                    return Ok(());
                }
                Pass::Reset => {
                    state = form.reset().await?;
                    self.console.println("Form reset.");
                    pending = FieldId::ALL.to_vec();
                    continue;
                }
                Pass::Completed => {}
            }

            state = form.submit().await?;
            let errors: Vec<FieldId> = state
                .visible_errors()
                .into_iter()
                .map(|(field, message)| {
                    self.console.println(&format!("  {}: {message}", field.label()));
                    field
                })
                .collect();
            pending = if errors.is_empty() {
                FieldId::ALL.to_vec()
            } else {
                errors
            };
        }
    }

    async fn prompt_fields(
        &self,
        form: &EmployeeFormOrchestrator,
        state: &FormState,
        fields: &[FieldId],
    ) -> Result<Pass, FormError> {
        for &field in fields {
            let current = field.get(state.values()).to_string();
            match self.read_field(form, field, &current).await {
                Input::Value(value) => {
                    let next = form.change_field(field, value).await?;
                    if let Some(message) = next.visible_error(field) {
                        self.console.println(&format!("  {message}"));
                    }
                }
                Input::Keep => {}
                Input::Reset => return Ok(Pass::Reset),
                Input::Cancel => return Ok(Pass::Cancelled),
            }
        }
        Ok(Pass::Completed)
    }

    async fn read_field(
        &self,
        form: &EmployeeFormOrchestrator,
        field: FieldId,
        current: &str,
    ) -> Input {
        let mut label = field.label().to_string();
        if let Some(options) = form.schema().options_for(field) {
            label.push_str(&format!(" ({})", options.join("/")));
        }
        if !current.is_empty() {
            label.push_str(&format!(" [{current}]"));
        }
        label.push_str(": ");

        let line = match self
            .console
            .prompt(&label)
            .await
            .with_context(|| format!("reading {}", field.wire_name()))
        {
            Ok(Some(line)) => line,
            Ok(None) => return Input::Cancel,
            Err(err) => {
                tracing::warn!(error = %err, "console input failed; cancelling form");
                return Input::Cancel;
            }
        };

        parse_input(&line, current)
    }
}

fn parse_input(line: &str, current: &str) -> Input {
    match line.trim() {
        RESET_COMMAND => Input::Reset,
        CANCEL_COMMAND => Input::Cancel,
        "" if !current.is_empty() => Input::Keep,
        _ => Input::Value(line.to_string()),
    }
}
