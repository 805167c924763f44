//! Reusable rules for text fields.
//!
//! A [`TextRule`] is a plain value: pure validators call [`TextRule::check`]
//! directly, and the same rule can be handed to
//! [`FormController::register_field_validator`](super::FormController::register_field_validator)
//! for any lens over a `SharedString` field.

use std::sync::LazyLock;

use gpui::SharedString;
use regex::Regex;

use super::validation::{FieldLens, FieldValidator, ValidationError};

/// Local part, a single `@`, then a domain holding at least one dot.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern is a valid regex")
});

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextRuleKind {
    /// At least this many characters (not bytes).
    MinChars(usize),
    Required,
    Email,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TextRule<E> {
    kind: TextRuleKind,
    error: E,
}

pub fn min_chars<E>(min: usize, error: E) -> TextRule<E> {
    TextRule {
        kind: TextRuleKind::MinChars(min),
        error,
    }
}

pub fn required<E>(error: E) -> TextRule<E> {
    TextRule {
        kind: TextRuleKind::Required,
        error,
    }
}

pub fn email<E>(error: E) -> TextRule<E> {
    TextRule {
        kind: TextRuleKind::Email,
        error,
    }
}

impl<E> TextRule<E> {
    pub fn kind(&self) -> TextRuleKind {
        self.kind
    }

    pub fn error(&self) -> &E {
        &self.error
    }

    pub fn passes(&self, value: &str) -> bool {
        match self.kind {
            TextRuleKind::MinChars(min) => value.chars().count() >= min,
            TextRuleKind::Required => !value.is_empty(),
            TextRuleKind::Email => EMAIL_PATTERN.is_match(value),
        }
    }
}

impl<E: Clone> TextRule<E> {
    pub fn check(&self, value: &str) -> Result<(), E> {
        if self.passes(value) {
            Ok(())
        } else {
            Err(self.error.clone())
        }
    }
}

impl<T, L, E> FieldValidator<T, L, E> for TextRule<E>
where
    L: FieldLens<T, Value = SharedString>,
    E: ValidationError,
{
    fn validate(&self, _model: &T, value: &L::Value) -> Result<(), E> {
        self.check(value)
    }
}
