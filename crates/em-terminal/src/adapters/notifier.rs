use std::sync::Arc;

use async_trait::async_trait;

use em_core::form::{Notice, NoticeKind};
use em_core::ports::{NotificationPort, UserChoice};

use super::Console;

/// Prints notices to the console; confirm prompts read a yes/no answer.
pub struct TerminalNotifier {
    console: Arc<Console>,
}

impl TerminalNotifier {
    pub fn new(console: Arc<Console>) -> Self {
        Self { console }
    }
}

fn badge(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "[ok]",
        NoticeKind::Failure => "[error]",
        NoticeKind::Info => "[info]",
        NoticeKind::Confirm => "[?]",
    }
}

#[async_trait]
impl NotificationPort for TerminalNotifier {
    async fn notify(&self, notice: Notice) -> UserChoice {
        let line = if notice.text.is_empty() {
            format!("{} {}", badge(notice.kind), notice.title)
        } else {
            format!("{} {} {}", badge(notice.kind), notice.title, notice.text)
        };

        if notice.kind != NoticeKind::Confirm {
            self.console.println(&line);
            return UserChoice::Acknowledged;
        }

        match self.console.prompt(&format!("{line} [y/N]: ")).await {
            Ok(Some(answer)) if matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") => {
                UserChoice::Confirmed
            }
            Ok(_) => UserChoice::Declined,
            Err(err) => {
                tracing::warn!(error = %err, "confirm prompt failed; treating as declined");
                UserChoice::Declined
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::testing::scripted;

    #[tokio::test]
    async fn test_confirm_accepts_yes_only() {
        let (console, out) = scripted("yes\nno\n");
        let notifier = TerminalNotifier::new(console);

        let first = notifier
            .notify(Notice::confirm("Are you sure?", "Once deleted, you will not be able to recover this record!"))
            .await;
        let second = notifier.notify(Notice::confirm("Add another one?", "")).await;
        let third = notifier.notify(Notice::confirm("Out of input", "")).await;

        assert_eq!(first, UserChoice::Confirmed);
        assert_eq!(second, UserChoice::Declined);
        assert_eq!(third, UserChoice::Declined);
        assert!(out.contents().starts_with("[?] Are you sure? Once deleted"));
    }

    #[tokio::test]
    async fn test_plain_notice_is_printed() {
        let (console, out) = scripted("");
        let notifier = TerminalNotifier::new(console);

        let choice = notifier
            .notify(Notice::success("Deleted!", "Record has been deleted."))
            .await;

        assert_eq!(choice, UserChoice::Acknowledged);
        assert_eq!(out.contents(), "[ok] Deleted! Record has been deleted.\n");
    }
}
