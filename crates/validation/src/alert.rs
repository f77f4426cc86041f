//! Hook for showing validation failures to the user.

use crate::form::FieldRejection;

/// Implemented by the UI to display a titled error for a field.
pub trait AlertSink {
    fn validation_alert(&mut self, title: &str, field_label: &str, message: &str);
}

impl<F> AlertSink for F
where
    F: FnMut(&str, &str, &str),
{
    fn validation_alert(&mut self, title: &str, field_label: &str, message: &str) {
        self(title, field_label, message)
    }
}

/// Headless sink: alerts become `warn` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAlertSink;

impl AlertSink for TracingAlertSink {
    fn validation_alert(&mut self, title: &str, field_label: &str, message: &str) {
        tracing::warn!(title, field = field_label, message, "validation alert");
    }
}

impl FieldRejection {
    /// Sends this rejection to `sink` under the screen's `title`.
    pub fn report(&self, sink: &mut dyn AlertSink, title: &str) {
        sink.validation_alert(title, self.label, self.message);
    }
}
