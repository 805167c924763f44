use std::fmt::{Display, Formatter};
use std::str::FromStr;

use gpui::SharedString;

use super::validator::FieldValidationError;
use crate::form::{FieldKey, FieldLens, FormModel, TextRule, rules};

/// Live values of the contact form. `message` is optional; empty means
/// "not provided".
#[derive(Clone, Debug, Eq, PartialEq, FormModel)]
pub struct ContactForm {
    #[form(key = "firstName")]
    pub first_name: SharedString,
    #[form(key = "lastName")]
    pub last_name: SharedString,
    pub email: SharedString,
    pub message: SharedString,
}

impl ContactForm {
    pub fn new(
        first_name: impl Into<SharedString>,
        last_name: impl Into<SharedString>,
        email: impl Into<SharedString>,
        message: impl Into<SharedString>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn value(&self, field: ContactField) -> &SharedString {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new("", "", "", "")
    }
}

pub const FIRST_NAME_MIN_CHARS: usize = 5;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::Message,
    ];

    pub fn key(self) -> FieldKey {
        let fields = ContactForm::fields();
        match self {
            ContactField::FirstName => fields.first_name().key(),
            ContactField::LastName => fields.last_name().key(),
            ContactField::Email => fields.email().key(),
            ContactField::Message => fields.message().key(),
        }
    }

    /// Input label; required fields carry a trailing `*`.
    pub fn label(self) -> &'static str {
        match self {
            ContactField::FirstName => "First Name*",
            ContactField::LastName => "Last Name*",
            ContactField::Email => "Email*",
            ContactField::Message => "Message",
        }
    }

    /// Caption used in the confirmation block.
    pub fn caption(self) -> &'static str {
        match self {
            ContactField::FirstName => "First Name",
            ContactField::LastName => "Last Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    pub fn display_id(self) -> &'static str {
        match self {
            ContactField::FirstName => "firstnameDisplay",
            ContactField::LastName => "lastnameDisplay",
            ContactField::Email => "emailDisplay",
            ContactField::Message => "messageDisplay",
        }
    }

    /// The rule guarding this field; `None` for the free-form message.
    pub fn rule(self) -> Option<TextRule<FieldValidationError>> {
        match self {
            ContactField::FirstName => Some(rules::min_chars(
                FIRST_NAME_MIN_CHARS,
                FieldValidationError::first_name_too_short(),
            )),
            ContactField::LastName => {
                Some(rules::required(FieldValidationError::last_name_missing()))
            }
            ContactField::Email => Some(rules::email(FieldValidationError::invalid_email())),
            ContactField::Message => None,
        }
    }

    pub fn is_required(self) -> bool {
        self.rule().is_some()
    }
}

impl Display for ContactField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key().as_str())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown contact form field `{0}`")]
pub struct ParseFieldError(pub String);

/// Accepts the external key (`firstName`) or the snake_case name
/// (`first_name`).
impl FromStr for ContactField {
    type Err = ParseFieldError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "firstName" | "first_name" => Ok(ContactField::FirstName),
            "lastName" | "last_name" => Ok(ContactField::LastName),
            "email" => Ok(ContactField::Email),
            "message" => Ok(ContactField::Message),
            _ => Err(ParseFieldError(name.to_string())),
        }
    }
}
