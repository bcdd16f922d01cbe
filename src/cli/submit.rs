use contactform_contact::{
    CONFIRMATION, Delivery, FormController, FormValues, HttpSubmitSink, SubmitOutcome,
};

use super::{FormArgs, Status, fill, render_errors};
use crate::config::Config;

#[tracing::instrument(skip_all, fields(endpoint = %config.submit.endpoint))]
pub async fn submit(config: &Config, args: FormArgs) -> anyhow::Result<Status> {
    let sink = HttpSubmitSink::new(&config.submit.endpoint, config.submit.timeout())?;
    let mut controller =
        FormController::new(sink).confirmation_delay(config.submit.confirmation_delay());

    fill(&mut controller, &FormValues::from(args))?;

    let dispatch = match controller.submit()? {
        SubmitOutcome::Blocked(errors) => {
            tracing::warn!(errors = errors.len(), "submission blocked");
            println!("{}", render_errors(&errors));
            return Ok(Status::Invalid);
        }
        SubmitOutcome::Dispatched(dispatch) => dispatch,
    };

    tracing::info!(pending = controller.pending_submissions(), "submission dispatched");

    match dispatch.finished().await {
        Delivery::Sent => {
            println!("{CONFIRMATION}");
            Ok(Status::Ok)
        }
        Delivery::Failed => Ok(Status::Failed),
    }
}
