use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Named slot of the contact form, addressed on the wire by its camelCase name.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    QueryType,
    Message,
    Consent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Checkbox,
}

impl Field {
    /// Rust attribute name of the field on the form values struct.
    pub const fn attribute(self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::QueryType => "query_type",
            Field::Message => "message",
            Field::Consent => "consent",
        }
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            Field::Consent => FieldKind::Checkbox,
            _ => FieldKind::Text,
        }
    }
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
pub enum QueryType {
    #[serde(rename = "General Enquiry")]
    #[strum(serialize = "General Enquiry")]
    GeneralEnquiry,
    #[serde(rename = "Support Request")]
    #[strum(serialize = "Support Request")]
    SupportRequest,
}
