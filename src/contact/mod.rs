//! The contact form: first name, last name, email and an optional message.
//!
//! [`validate`] is the pure rule set; [`ContactFormController`] wires it to
//! input events, error visibility, and the submitted snapshot, and produces a
//! [`ContactFormView`] for whatever renders the form.

mod controller;
mod model;
mod validator;
mod view;


pub use controller::{ContactEvent, ContactFormController, ContactPhase};
pub use model::{
    ContactField, ContactForm, ContactFormEmailLens, ContactFormFields, ContactFormFirstNameLens,
    ContactFormLastNameLens, ContactFormMessageLens, FIRST_NAME_MIN_CHARS, ParseFieldError,
};
pub use validator::{FieldValidationError, ValidationResult, check_field, validate};
pub use view::{
    ContactFormView, DisplayEntry, FieldView, FormRenderer, HEADER, TextRenderer, confirmation,
};
