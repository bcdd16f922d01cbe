use std::sync::{Arc, Mutex};

use contactform_contact::{
    FieldValue, FormController, FormValues, Notifier, SubmitError, SubmitSink,
};
use contactform_shared::contact::{Field, QueryType};
use strum::VariantArray;

#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingSink {
    received: Arc<Mutex<Vec<FormValues>>>,
}

impl RecordingSink {
    #[allow(dead_code)]
    pub fn received(&self) -> Vec<FormValues> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SubmitSink for RecordingSink {
    async fn submit(&self, payload: &FormValues) -> Result<(), SubmitError> {
        self.received.lock().unwrap().push(payload.clone());

        Ok(())
    }
}

#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct FailingSink {
    attempts: Arc<Mutex<u32>>,
}

impl FailingSink {
    #[allow(dead_code)]
    pub fn attempts(&self) -> u32 {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl SubmitSink for FailingSink {
    async fn submit(&self, _payload: &FormValues) -> Result<(), SubmitError> {
        *self.attempts.lock().unwrap() += 1;

        Err(SubmitError::Status(503))
    }
}

#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct PanickingSink;

#[async_trait::async_trait]
impl SubmitSink for PanickingSink {
    async fn submit(&self, _payload: &FormValues) -> Result<(), SubmitError> {
        panic!("sink exploded");
    }
}

#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<FormValues>>>,
    failed: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    #[allow(dead_code)]
    pub fn sent(&self) -> Vec<FormValues> {
        self.sent.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn failed(&self) -> Vec<String> {
        self.failed.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn sent(&self, payload: &FormValues) {
        self.sent.lock().unwrap().push(payload.clone());
    }

    fn failed(&self, _payload: &FormValues, error: &SubmitError) {
        self.failed.lock().unwrap().push(error.to_string());
    }
}

#[allow(dead_code)]
pub fn valid_values() -> FormValues {
    FormValues {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        query_type: QueryType::SupportRequest.to_string(),
        message: "The analytical engine is stuck.".to_owned(),
        consent: true,
    }
}

/// Types every field of `values` into the form and leaves it, the way a user
/// filling the form top to bottom would.
#[allow(dead_code)]
pub fn fill<S: SubmitSink, N: Notifier>(
    controller: &mut FormController<S, N>,
    values: &FormValues,
) -> anyhow::Result<()> {
    for field in Field::VARIANTS {
        let value: FieldValue = values.get(*field);
        controller.set_field_value(*field, value)?;
        controller.set_field_touched(*field);
    }

    Ok(())
}
