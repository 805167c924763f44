use std::collections::BTreeMap;

use gpui::SharedString;

use super::model::{ContactField, ContactForm};
use crate::form::ValidationError;

/// The single error kind of the contact form: one field, one fixed message.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct FieldValidationError {
    field: ContactField,
    message: &'static str,
}

impl FieldValidationError {
    pub const fn first_name_too_short() -> Self {
        Self {
            field: ContactField::FirstName,
            message: "firstname must have at least 5 characters",
        }
    }

    pub const fn last_name_missing() -> Self {
        Self {
            field: ContactField::LastName,
            message: "lastname is a required field",
        }
    }

    pub const fn invalid_email() -> Self {
        Self {
            field: ContactField::Email,
            message: "email must be a valid email address",
        }
    }

    pub fn field(&self) -> ContactField {
        self.field
    }

    pub fn text(&self) -> &'static str {
        self.message
    }
}

impl ValidationError for FieldValidationError {
    fn message(&self) -> SharedString {
        self.message.into()
    }
}

/// Per-field outcome of [`validate`]. Fields without an entry are valid.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationResult {
    errors: BTreeMap<ContactField, FieldValidationError>,
}

impl ValidationResult {
    pub fn error(&self, field: ContactField) -> Option<&FieldValidationError> {
        self.errors.get(&field)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldValidationError> {
        self.errors.values()
    }
}

pub fn check_field(field: ContactField, values: &ContactForm) -> Result<(), FieldValidationError> {
    match field.rule() {
        Some(rule) => rule.check(values.value(field)),
        None => Ok(()),
    }
}

pub fn validate(values: &ContactForm) -> ValidationResult {
    let errors = ContactField::ALL
        .into_iter()
        .filter_map(|field| {
            check_field(field, values)
                .err()
                .map(|error| (field, error))
        })
        .collect();
    ValidationResult { errors }
}
