use gpui::SharedString;

use super::model::{ContactField, ContactForm};

pub const HEADER: &str = "Contact Form";

/// Everything the rendering layer draws for one frame of the contact form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContactFormView {
    pub header: SharedString,
    pub fields: Vec<FieldView>,
    /// Present only while a submitted snapshot exists.
    pub confirmation: Option<Vec<DisplayEntry>>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldView {
    pub field: ContactField,
    pub label: SharedString,
    pub value: SharedString,
    pub required: bool,
    /// Inline error text, already prefixed with `Error: `.
    pub error: Option<SharedString>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisplayEntry {
    pub field: ContactField,
    pub id: &'static str,
    pub text: SharedString,
}

impl ContactFormView {
    pub fn errors(&self) -> impl Iterator<Item = &SharedString> {
        self.fields.iter().filter_map(|field| field.error.as_ref())
    }

    pub fn field(&self, field: ContactField) -> Option<&FieldView> {
        self.fields.iter().find(|view| view.field == field)
    }

    pub fn display(&self, id: &str) -> Option<&DisplayEntry> {
        self.confirmation
            .as_deref()?
            .iter()
            .find(|entry| entry.id == id)
    }

    pub fn is_submitted(&self) -> bool {
        self.confirmation.is_some()
    }
}

pub fn error_text(message: &str) -> SharedString {
    format!("Error: {message}").into()
}

/// Builds the read-only confirmation block. The message entry is omitted when
/// no message was submitted.
pub fn confirmation(submitted: &ContactForm) -> Vec<DisplayEntry> {
    ContactField::ALL
        .into_iter()
        .filter(|field| *field != ContactField::Message || !submitted.message.is_empty())
        .map(|field| DisplayEntry {
            field,
            id: field.display_id(),
            text: format!("{}: {}", field.caption(), submitted.value(field)).into(),
        })
        .collect()
}

/// Receives every frame produced by
/// [`ContactFormController::render`](super::ContactFormController::render).
pub trait FormRenderer {
    fn render_form(&mut self, view: &ContactFormView);
}

/// Headless renderer that flattens a frame into plain text lines.
#[derive(Clone, Debug, Default)]
pub struct TextRenderer {
    lines: Vec<String>,
    frames: usize,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn contains(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.lines
            .iter()
            .any(|line| line.to_lowercase().contains(&needle))
    }
}

impl FormRenderer for TextRenderer {
    fn render_form(&mut self, view: &ContactFormView) {
        self.frames += 1;
        self.lines.clear();
        self.lines.push(view.header.to_string());
        for field in &view.fields {
            self.lines.push(format!("{}: {}", field.label, field.value));
            if let Some(error) = &field.error {
                self.lines.push(error.to_string());
            }
        }
        if let Some(entries) = &view.confirmation {
            self.lines.push("You Submitted:".to_string());
            self.lines
                .extend(entries.iter().map(|entry| entry.text.to_string()));
        }
    }
}
