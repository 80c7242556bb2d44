//! Notification Port
//!
//! The client never talks to a UI directly. Outcomes are pushed through a
//! [`Notifier`], which decides whether a message becomes a modal, a toast, a
//! log line, or all of them.

/// Channel a notification is meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Blocking, modal-style acknowledgment shown to the user
    User,
    /// Non-blocking diagnostic output, never shown as a modal
    Diagnostic,
}

/// Receives outcome notifications from the cart update client.
///
/// Implementations must be `Send + Sync` so a single notifier can be shared
/// by overlapping submissions.
pub trait Notifier: Send + Sync {
    /// Delivers `message` on the channel selected by `severity`
    fn notify(&self, severity: Severity, message: &str);
}

/// Notifier for terminal use: user messages go to stdout, diagnostics to the
/// tracing subscriber at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::User => println!("{}", message),
            Severity::Diagnostic => tracing::error!("{}", message),
        }
    }
}
