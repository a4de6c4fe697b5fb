use std::collections::BTreeSet;

use serde::Serialize;

use crate::employee::{validate, EmployeeDraft, FieldErrors, FieldId, FieldSchema};
use crate::ids::EmployeeId;

use super::Route;

/// Which flow the form belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FormMode {
    Create,
    /// Editing the record with this immutable identifier.
    Edit { id: EmployeeId },
}

impl FormMode {
    pub fn id(&self) -> Option<&EmployeeId> {
        match self {
            FormMode::Create => None,
            FormMode::Edit { id } => Some(id),
        }
    }

    /// Where Cancel leads.
    pub fn cancel_route(&self) -> Route {
        match self {
            FormMode::Create => Route::Home,
            FormMode::Edit { .. } => Route::EmployeeList,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormPhase {
    /// Edit flow: waiting for the record loader.
    Loading,
    /// Edit flow: the record could not be loaded. Only Cancel is accepted.
    LoadFailed,
    Editing,
    /// A create/update request is in flight; the form is locked.
    Submitting,
    /// Edit flow: update persisted, waiting for navigation away.
    SubmitSucceeded,
}

/// Transient state of one mounted form.
///
/// Fields are private so `errors` can only change together with `values`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    mode: FormMode,
    phase: FormPhase,
    values: EmployeeDraft,
    initial: EmployeeDraft,
    touched: BTreeSet<FieldId>,
    errors: FieldErrors,
}

impl FormState {
    pub(crate) fn fresh(schema: &FieldSchema, mode: FormMode, phase: FormPhase) -> Self {
        let values = EmployeeDraft::empty();
        Self {
            mode,
            phase,
            errors: validate(schema, &values),
            initial: values.clone(),
            values,
            touched: BTreeSet::new(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FormPhase::Loading
    }

    /// Whether field input is accepted right now.
    pub fn is_interactive(&self) -> bool {
        self.phase == FormPhase::Editing
    }

    /// Current draft. Prefer [`FormState::renderable_values`] for display.
    pub fn values(&self) -> &EmployeeDraft {
        &self.values
    }

    /// Values safe to render: `None` until an edit-flow record has loaded.
    pub fn renderable_values(&self) -> Option<&EmployeeDraft> {
        match self.phase {
            FormPhase::Loading | FormPhase::LoadFailed => None,
            _ => Some(&self.values),
        }
    }

    pub fn initial_values(&self) -> &EmployeeDraft {
        &self.initial
    }

    pub fn is_touched(&self, field: FieldId) -> bool {
        self.touched.contains(&field)
    }

    pub fn touched(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.touched.iter().copied()
    }

    /// All current errors, touched or not.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Error to show for `field`; hidden until the field is touched.
    pub fn visible_error(&self, field: FieldId) -> Option<&str> {
        if self.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn visible_errors(&self) -> Vec<(FieldId, &str)> {
        self.errors
            .iter()
            .filter(|(field, _)| self.is_touched(*field))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    // ===== Mutators used by the state machine =====

    pub(crate) fn set_phase(&mut self, phase: FormPhase) {
        self.phase = phase;
    }

    pub(crate) fn hydrate(&mut self, schema: &FieldSchema, draft: EmployeeDraft) {
        self.initial = draft.clone();
        self.touched.clear();
        self.replace_values(schema, draft);
    }

    pub(crate) fn set_field(&mut self, schema: &FieldSchema, field: FieldId, value: String) {
        let mut values = std::mem::take(&mut self.values);
        field.set(&mut values, value);
        self.touched.insert(field);
        self.replace_values(schema, values);
    }

    pub(crate) fn touch_all(&mut self) {
        self.touched.extend(FieldId::ALL);
    }

    pub(crate) fn reset(&mut self, schema: &FieldSchema) {
        self.touched.clear();
        self.replace_values(schema, self.initial.clone());
    }

    pub(crate) fn revalidate(&mut self, schema: &FieldSchema) {
        self.errors = validate(schema, &self.values);
    }

    fn replace_values(&mut self, schema: &FieldSchema, values: EmployeeDraft) {
        self.values = values;
        self.revalidate(schema);
    }
}
