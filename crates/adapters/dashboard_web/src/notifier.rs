//! [`Notifier`] implementation using `window.alert`.

use relayboard_app::ports::Notifier;

/// Blocking browser alert.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!(alert = message, "no window to alert on");
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            tracing::warn!(?err, alert = message, "alert failed");
        }
    }
}
