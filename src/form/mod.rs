mod controller;
mod presentation;
pub mod rules;
mod validation;

#[cfg(test)]
mod tests;

pub use contact_form_derive::FormModel;
pub use controller::{
    FieldKey, FieldMeta, FormController, FormError, FormOptions, FormResult, FormSnapshot,
    SubmitState, SubmittedPolicy, ValidationMode,
};
pub use presentation::FieldPresentation;
pub use rules::{TextRule, TextRuleKind};
pub use validation::{FieldLens, FieldValidator, FormModel, ValidationError};
