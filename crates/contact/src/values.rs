use contactform_shared::{
    Error, Result,
    contact::{Field, QueryType},
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Everything the contact form collects. Serialized as the JSON body posted
/// to the submission endpoint.
#[derive(Validate, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    #[validate(custom(function = "crate::schema::required"))]
    pub first_name: String,
    #[validate(custom(function = "crate::schema::required"))]
    pub last_name: String,
    #[validate(custom(function = "crate::schema::email_address"))]
    pub email: String,
    #[validate(custom(function = "crate::schema::query_type"))]
    pub query_type: String,
    #[validate(custom(function = "crate::schema::required"))]
    pub message: String,
    #[validate(custom(function = "crate::schema::consent"))]
    pub consent: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Checked(value)
    }
}

impl From<QueryType> for FieldValue {
    fn from(value: QueryType) -> Self {
        Self::Text(value.to_string())
    }
}

impl FormValues {
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::FirstName => self.first_name.as_str().into(),
            Field::LastName => self.last_name.as_str().into(),
            Field::Email => self.email.as_str().into(),
            Field::QueryType => self.query_type.as_str().into(),
            Field::Message => self.message.as_str().into(),
            Field::Consent => self.consent.into(),
        }
    }

    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<()> {
        match (field, value) {
            (Field::FirstName, FieldValue::Text(text)) => self.first_name = text,
            (Field::LastName, FieldValue::Text(text)) => self.last_name = text,
            (Field::Email, FieldValue::Text(text)) => self.email = text,
            (Field::QueryType, FieldValue::Text(text)) => self.query_type = text,
            (Field::Message, FieldValue::Text(text)) => self.message = text,
            (Field::Consent, FieldValue::Checked(checked)) => self.consent = checked,
            (Field::Consent, FieldValue::Text(_)) => {
                return Err(Error::FieldType {
                    field,
                    expected: "boolean",
                });
            }
            (_, FieldValue::Checked(_)) => {
                return Err(Error::FieldType {
                    field,
                    expected: "text",
                });
            }
        }

        Ok(())
    }
}
