use contactform_contact::{ErrorState, FormValues, schema};
use contactform_shared::Error;

use super::{FormArgs, Status, render_errors};

/// Runs the validation rules as if every field had been left once.
pub fn validate(args: FormArgs) -> anyhow::Result<Status> {
    let values = FormValues::from(args);

    match schema::check(&values) {
        Ok(()) => {
            tracing::info!("contact form is valid");
            Ok(Status::Ok)
        }
        Err(Error::Validate(errors)) => {
            let errors = ErrorState::from_validation_errors(&errors);
            tracing::warn!(errors = errors.len(), "contact form has validation errors");
            println!("{}", render_errors(&errors));

            Ok(Status::Invalid)
        }
        Err(err) => Err(err.into()),
    }
}
