use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::employee::EmployeeDraft;
use crate::ids::EmployeeId;

/// Screens the shell can show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Home,
    EmployeeList,
    AddEmployee,
    EditEmployee(EmployeeId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::EmployeeList => "/employee/view".to_string(),
            Route::AddEmployee => "/employee/add".to_string(),
            Route::EditEmployee(id) => format!("/employee/edit/{id}"),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Success,
    Failure,
    Info,
    /// Yes/No prompt; the only kind whose answer matters.
    Confirm,
}

/// A toast or prompt shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

impl Notice {
    fn new(kind: NoticeKind, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, title, text)
    }

    pub fn failure(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Failure, title, text)
    }

    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, title, text)
    }

    pub fn confirm(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Confirm, title, text)
    }
}

/// Side-effects produced by form transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Load the record being edited.
    FetchRecord { id: EmployeeId },
    /// Persist a new record.
    CreateRecord { draft: EmployeeDraft },
    /// Persist changes to an existing record.
    UpdateRecord { id: EmployeeId, draft: EmployeeDraft },
    Notify(Notice),
    /// Ask whether to add another employee after a successful create.
    OfferAddAnother,
    Navigate(Route),
}
