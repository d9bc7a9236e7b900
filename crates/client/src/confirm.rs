//! Injected confirmation capability for destructive actions.

/// Asks the user a yes/no question before a destructive action proceeds.
///
/// Injected into the view instead of calling a platform-global blocking
/// prompt, so tests can script the answer.
pub trait ConfirmPrompt {
    /// Returns `true` if the user accepts.
    fn confirm(&self, message: &str) -> bool;
}

/// Prompt that accepts everything. For non-interactive callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysConfirm;

impl ConfirmPrompt for AlwaysConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}
