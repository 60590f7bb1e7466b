//! Notifier port — user-visible error notifications.

/// Message shown when a toggle request fails.
pub const TOGGLE_ERROR_MESSAGE: &str = "error toggling relay";

/// Surfaces an error to the user (`window.alert` in the browser, stderr on a
/// terminal).
pub trait Notifier {
    fn alert(&self, message: &str);
}
