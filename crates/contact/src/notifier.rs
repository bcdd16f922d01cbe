use crate::{FormValues, SubmitError};

pub const CONFIRMATION: &str = "Message sent";

/// Side channel told how a dispatched submission ended. The form has already
/// been reset by then, so nothing here can affect its state.
pub trait Notifier: Send + Sync + 'static {
    fn sent(&self, payload: &FormValues);
    fn failed(&self, payload: &FormValues, error: &SubmitError);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn sent(&self, payload: &FormValues) {
        tracing::info!(query_type = %payload.query_type, "{CONFIRMATION}");
    }

    fn failed(&self, payload: &FormValues, error: &SubmitError) {
        tracing::error!(
            query_type = %payload.query_type,
            error = %error,
            "Failed to send contact form"
        );
    }
}
