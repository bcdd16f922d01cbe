//! Validation rules of the contact form.
//!
//! Every field carries one rule and one message. [`validate`] runs the whole
//! table against a [`FormValues`] and never fails: an empty [`ErrorState`]
//! means the values can be submitted.

use std::{borrow::Cow, str::FromStr};

use contactform_shared::contact::QueryType;
use validator::{Validate, ValidateEmail, ValidationError};

use crate::{ErrorState, FormValues};

pub const REQUIRED: &str = "This field is required";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const SELECT_QUERY_TYPE: &str = "Please select a query type";
pub const CONSENT_REQUIRED: &str = "To submit this form, please consent to being contacted";

/// Fails with [`contactform_shared::Error::Validate`] when any rule rejects
/// `values`.
pub fn check(values: &FormValues) -> contactform_shared::Result<()> {
    values.validate()?;

    Ok(())
}

pub fn validate(values: &FormValues) -> ErrorState {
    match values.validate() {
        Ok(()) => ErrorState::default(),
        Err(errors) => ErrorState::from_validation_errors(&errors),
    }
}

pub(crate) fn required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(rule("required", REQUIRED));
    }

    Ok(())
}

pub(crate) fn email_address(value: &str) -> Result<(), ValidationError> {
    required(value)?;

    if !value.validate_email() {
        return Err(rule("email", INVALID_EMAIL));
    }

    Ok(())
}

pub(crate) fn query_type(value: &str) -> Result<(), ValidationError> {
    QueryType::from_str(value)
        .map(|_| ())
        .map_err(|_| rule("query_type", SELECT_QUERY_TYPE))
}

pub(crate) fn consent(value: &bool) -> Result<(), ValidationError> {
    if !*value {
        return Err(rule("consent", CONSENT_REQUIRED));
    }

    Ok(())
}

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}
