//! Add/Edit employee form.
//!
//! The form is a pure state machine; see [`FormStateMachine`].

pub mod action;
pub mod event;
pub mod state;
pub mod state_machine;

pub use action::{FormAction, Notice, NoticeKind, Route};
pub use event::FormEvent;
pub use state::{FormMode, FormPhase, FormState};
pub use state_machine::FormStateMachine;
