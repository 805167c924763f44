pub mod contact;
pub mod form;

pub use contact::{
    ContactEvent, ContactField, ContactForm, ContactFormController, ContactFormView,
    ContactPhase, FieldValidationError, FormRenderer, ValidationResult, validate,
};
pub use form::{FormController, FormError, FormOptions, FormResult, SubmittedPolicy};
