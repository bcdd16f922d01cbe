use std::{
    any::Any,
    panic::AssertUnwindSafe,
    str::FromStr,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use contactform_shared::{Error, Result, contact::Field};
use futures::FutureExt;
use tokio::{runtime::Handle, task::JoinHandle};

use crate::{
    ErrorState, FieldValue, FormValues, Notifier, SubmitError, SubmitSink, TouchedState,
    TracingNotifier, schema,
};

pub const DEFAULT_CONFIRMATION_DELAY: Duration = Duration::from_millis(500);

/// How a dispatched submission ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    Failed,
}

/// Handle on a submission that left the form. The form was reset before this
/// value was returned; awaiting it only observes the background send.
#[derive(Debug)]
pub struct Dispatch {
    payload: FormValues,
    handle: JoinHandle<Delivery>,
}

impl Dispatch {
    pub fn payload(&self) -> &FormValues {
        &self.payload
    }

    pub async fn finished(self) -> Delivery {
        match self.handle.await {
            Ok(delivery) => delivery,
            Err(err) => {
                tracing::error!(error = %err, "submission task did not complete");
                Delivery::Failed
            }
        }
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; every field is touched so the errors are visible.
    Blocked(ErrorState),
    Dispatched(Dispatch),
}

impl SubmitOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, SubmitOutcome::Blocked(_))
    }
}

/// State of one contact form: values, touched fields and the errors the
/// schema derives from the values.
pub struct FormController<S, N = TracingNotifier> {
    values: FormValues,
    touched: TouchedState,
    errors: ErrorState,
    sink: Arc<S>,
    notifier: Arc<N>,
    confirmation_delay: Duration,
    pending: Arc<AtomicUsize>,
}

impl<S: SubmitSink> FormController<S, TracingNotifier> {
    pub fn new(sink: S) -> Self {
        let values = FormValues::default();
        let errors = schema::validate(&values);

        Self {
            values,
            touched: TouchedState::default(),
            errors,
            sink: Arc::new(sink),
            notifier: Arc::new(TracingNotifier),
            confirmation_delay: DEFAULT_CONFIRMATION_DELAY,
            pending: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl<S: SubmitSink, N: Notifier> FormController<S, N> {
    pub fn with_notifier<M: Notifier>(self, notifier: M) -> FormController<S, M> {
        FormController {
            values: self.values,
            touched: self.touched,
            errors: self.errors,
            sink: self.sink,
            notifier: Arc::new(notifier),
            confirmation_delay: self.confirmation_delay,
            pending: self.pending,
        }
    }

    pub fn confirmation_delay(mut self, delay: Duration) -> Self {
        self.confirmation_delay = delay;
        self
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn touched(&self) -> &TouchedState {
        &self.touched
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error shown next to `field`: only once the field was touched.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if !self.touched.is_touched(field) {
            return None;
        }

        self.errors.get(field)
    }

    pub fn visible_errors(&self) -> Vec<(Field, &str)> {
        self.errors
            .iter()
            .filter(|(field, _)| self.touched.is_touched(*field))
            .collect()
    }

    pub fn pending_submissions(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    pub fn set_field_value(&mut self, field: Field, value: impl Into<FieldValue>) -> Result<()> {
        self.values.set(field, value.into())?;
        self.errors = schema::validate(&self.values);

        Ok(())
    }

    pub fn set_field_touched(&mut self, field: Field) {
        self.touched.touch(field);
    }

    pub fn handle_change(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<()> {
        let field = parse_field(name)?;
        self.set_field_value(field, value)
    }

    pub fn handle_blur(&mut self, name: &str) -> Result<()> {
        let field = parse_field(name)?;
        self.set_field_touched(field);

        Ok(())
    }

    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.touched = TouchedState::default();
        self.errors = schema::validate(&self.values);
    }

    /// Validates the whole form. Valid values are handed to the sink on the
    /// current Tokio runtime after the form has been reset.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        self.touched.touch_all();
        self.errors = schema::validate(&self.values);

        if !self.errors.is_empty() {
            tracing::debug!(errors = self.errors.len(), "submission blocked");
            return Ok(SubmitOutcome::Blocked(self.errors.clone()));
        }

        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;
        let payload = std::mem::take(&mut self.values);
        self.reset();

        let handle = runtime.spawn(deliver(
            self.sink.clone(),
            self.notifier.clone(),
            payload.clone(),
            self.confirmation_delay,
            PendingGuard::acquire(&self.pending),
        ));

        Ok(SubmitOutcome::Dispatched(Dispatch { payload, handle }))
    }
}

fn parse_field(name: &str) -> Result<Field> {
    Field::from_str(name).map_err(|_| Error::UnknownField(name.to_owned()))
}

/// Holds one slot of the pending counter; released on drop so a panicking or
/// cancelled send still gives it back.
struct PendingGuard(Arc<AtomicUsize>);

impl PendingGuard {
    fn acquire(pending: &Arc<AtomicUsize>) -> Self {
        pending.fetch_add(1, Ordering::SeqCst);
        Self(pending.clone())
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[tracing::instrument(skip_all, fields(query_type = %payload.query_type))]
async fn deliver<S: SubmitSink, N: Notifier>(
    sink: Arc<S>,
    notifier: Arc<N>,
    payload: FormValues,
    confirmation_delay: Duration,
    pending: PendingGuard,
) -> Delivery {
    let result = match AssertUnwindSafe(sink.submit(&payload)).catch_unwind().await {
        Ok(result) => result,
        Err(panic) => Err(SubmitError::Aborted(panic_message(panic.as_ref()))),
    };
    drop(pending);

    match result {
        Ok(()) => {
            if !confirmation_delay.is_zero() {
                tokio::time::sleep(confirmation_delay).await;
            }
            notifier.sent(&payload);
            Delivery::Sent
        }
        Err(err) => {
            notifier.failed(&payload, &err);
            Delivery::Failed
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        return (*message).to_owned();
    }

    if let Some(message) = panic.downcast_ref::<String>() {
        return message.clone();
    }

    "sink panicked".to_owned()
}
