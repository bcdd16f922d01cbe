use std::process::ExitCode;

use clap::Args;
use contactform_contact::{ErrorState, FormController, FormValues, Notifier, SubmitSink};
use contactform_shared::contact::Field;
use strum::VariantArray;

mod submit;
mod validate;

pub use submit::submit;
pub use validate::validate;

/// How a command ended; mapped to the process exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Ok,
    /// Validation errors blocked the form
    Invalid,
    /// The endpoint did not accept the submission
    Failed,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Ok => ExitCode::SUCCESS,
            Status::Failed => ExitCode::from(1),
            Status::Invalid => ExitCode::from(2),
        }
    }
}

/// Contact form fields, one flag per field
#[derive(Args, Debug, Default, Clone)]
pub struct FormArgs {
    #[arg(long, default_value = "")]
    pub first_name: String,

    #[arg(long, default_value = "")]
    pub last_name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    /// "General Enquiry" or "Support Request"
    #[arg(long, default_value = "")]
    pub query_type: String,

    #[arg(long, default_value = "")]
    pub message: String,

    /// Consent to being contacted
    #[arg(long)]
    pub consent: bool,
}

impl From<FormArgs> for FormValues {
    fn from(args: FormArgs) -> Self {
        Self {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            query_type: args.query_type,
            message: args.message,
            consent: args.consent,
        }
    }
}

/// Replays `values` field by field as change then blur events.
pub fn fill<S: SubmitSink, N: Notifier>(
    controller: &mut FormController<S, N>,
    values: &FormValues,
) -> contactform_shared::Result<()> {
    for field in Field::VARIANTS {
        let name: &str = field.as_ref();
        controller.handle_change(name, values.get(*field))?;
        controller.handle_blur(name)?;
    }

    Ok(())
}

pub fn render_errors(errors: &ErrorState) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("\n")
}
