use std::collections::{BTreeMap, BTreeSet};

use contactform_shared::contact::Field;
use serde::Serialize;
use strum::VariantArray;
use validator::ValidationErrors;

/// Current error message per field, as produced by the schema.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorState(BTreeMap<Field, String>);

impl ErrorState {
    pub fn from_validation_errors(errors: &ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut messages = BTreeMap::new();

        for field in Field::VARIANTS {
            let wire_name: &str = field.as_ref();
            let Some(first) = field_errors
                .get(field.attribute())
                .or_else(|| field_errors.get(wire_name))
                .and_then(|errors| errors.first())
            else {
                continue;
            };

            let message = match &first.message {
                Some(message) => message.to_string(),
                None => first.code.to_string(),
            };
            messages.insert(*field, message);
        }

        Self(messages)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

/// Fields the user has left at least once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TouchedState(BTreeSet<Field>);

impl TouchedState {
    pub fn is_touched(&self, field: Field) -> bool {
        self.0.contains(&field)
    }

    pub fn touch(&mut self, field: Field) {
        self.0.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.0.extend(Field::VARIANTS.iter().copied());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
