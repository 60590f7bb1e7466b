//! [`Notifier`] implementation writing alerts as lines.

use std::cell::{Ref, RefCell};
use std::io::Write;

use relayboard_app::ports::Notifier;

/// Writes each alert on its own line, typically to stderr so that it does not
/// interleave with the status lines on stdout.
pub struct ConsoleNotifier<W> {
    out: RefCell<W>,
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    /// Borrow the underlying writer.
    ///
    /// # Panics
    ///
    /// Panics if called while an alert is being written.
    #[must_use]
    pub fn writer(&self) -> Ref<'_, W> {
        self.out.borrow()
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn alert(&self, message: &str) {
        let mut out = self.out.borrow_mut();
        if let Err(err) = writeln!(out, "{message}").and_then(|()| out.flush()) {
            tracing::warn!(error = %err, alert = message, "failed to write alert");
        }
    }
}
