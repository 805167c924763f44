use gpui::SharedString;
use log::{debug, info};

use super::model::{ContactField, ContactForm};
use super::validator::{FieldValidationError, ValidationResult, validate};
use super::view::{ContactFormView, FieldView, FormRenderer, HEADER, confirmation, error_text};
use crate::form::{
    FieldLens, FormController, FormModel, FormOptions, FormResult, SubmittedPolicy,
    ValidationMode,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContactPhase {
    Editing,
    Submitted,
}

/// Input coming from the rendering layer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ContactEvent {
    Change {
        field: ContactField,
        value: SharedString,
    },
    Submit,
}

impl ContactEvent {
    pub fn change(field: ContactField, value: impl Into<SharedString>) -> Self {
        Self::Change {
            field,
            value: value.into(),
        }
    }
}

/// Submission controller of the contact form.
///
/// Every edit revalidates the edited field and marks it touched, so its error
/// becomes visible right away. A submit validates everything, reveals every
/// error, and on success stores a copy of the values as the submitted
/// snapshot.
#[derive(Clone)]
pub struct ContactFormController {
    form: FormController<ContactForm, FieldValidationError>,
}

impl ContactFormController {
    pub fn new() -> FormResult<Self> {
        Self::with_policy(SubmittedPolicy::default())
    }

    pub fn with_policy(submitted_policy: SubmittedPolicy) -> FormResult<Self> {
        let form = FormController::new(
            ContactForm::default(),
            FormOptions {
                validate_mode: ValidationMode::OnChange,
                submitted_policy,
            },
        );
        let fields = ContactForm::fields();
        register(&form, fields.first_name(), ContactField::FirstName)?;
        register(&form, fields.last_name(), ContactField::LastName)?;
        register(&form, fields.email(), ContactField::Email)?;
        register(&form, fields.message(), ContactField::Message)?;
        Ok(Self { form })
    }

    pub fn form(&self) -> &FormController<ContactForm, FieldValidationError> {
        &self.form
    }

    pub fn handle(&self, event: ContactEvent) -> FormResult<()> {
        match event {
            ContactEvent::Change { field, value } => self.change(field, value),
            ContactEvent::Submit => self.submit().map(|_| ()),
        }
    }

    pub fn change(&self, field: ContactField, value: impl Into<SharedString>) -> FormResult<()> {
        let value = value.into();
        debug!("contact field `{field}` changed");
        let fields = ContactForm::fields();
        match field {
            ContactField::FirstName => self.edit(fields.first_name(), value),
            ContactField::LastName => self.edit(fields.last_name(), value),
            ContactField::Email => self.edit(fields.email(), value),
            ContactField::Message => self.edit(fields.message(), value),
        }
    }

    pub fn submit(&self) -> FormResult<ContactPhase> {
        self.form.submit(|values| {
            info!(
                "contact form submitted, message provided: {}",
                !values.message.is_empty()
            );
            Ok(())
        })?;
        self.phase()
    }

    pub fn phase(&self) -> FormResult<ContactPhase> {
        Ok(if self.form.submitted()?.is_some() {
            ContactPhase::Submitted
        } else {
            ContactPhase::Editing
        })
    }

    pub fn values(&self) -> FormResult<ContactForm> {
        Ok(self.form.snapshot()?.model)
    }

    /// Full validation of the current values, independent of visibility.
    pub fn validation(&self) -> FormResult<ValidationResult> {
        Ok(validate(&self.values()?))
    }

    pub fn submitted(&self) -> FormResult<Option<ContactForm>> {
        self.form.submitted()
    }

    /// Errors the user currently sees, in field order.
    pub fn visible_errors(&self) -> FormResult<Vec<SharedString>> {
        Ok(self
            .form
            .visible_errors()?
            .into_iter()
            .map(|(_, message)| message)
            .collect())
    }

    pub fn view(&self) -> FormResult<ContactFormView> {
        let fields = ContactForm::fields();
        let views = vec![
            self.field_view(fields.first_name(), ContactField::FirstName)?,
            self.field_view(fields.last_name(), ContactField::LastName)?,
            self.field_view(fields.email(), ContactField::Email)?,
            self.field_view(fields.message(), ContactField::Message)?,
        ];
        Ok(ContactFormView {
            header: HEADER.into(),
            fields: views,
            confirmation: self.form.submitted()?.as_ref().map(confirmation),
        })
    }

    pub fn render<R>(&self, renderer: &mut R) -> FormResult<()>
    where
        R: FormRenderer + ?Sized,
    {
        let view = self.view()?;
        renderer.render_form(&view);
        Ok(())
    }

    fn edit<L>(&self, lens: L, value: SharedString) -> FormResult<()>
    where
        L: FieldLens<ContactForm, Value = SharedString>,
    {
        self.form.set(lens, value)?;
        self.form.touch(lens)
    }

    fn field_view<L>(&self, lens: L, field: ContactField) -> FormResult<FieldView>
    where
        L: FieldLens<ContactForm, Value = SharedString>,
    {
        let presentation = self.form.present(lens)?;
        Ok(FieldView {
            field,
            label: field.label().into(),
            value: presentation.value,
            required: presentation.required,
            error: presentation.error.map(|message| error_text(&message)),
        })
    }
}

fn register<L>(
    form: &FormController<ContactForm, FieldValidationError>,
    lens: L,
    field: ContactField,
) -> FormResult<()>
where
    L: FieldLens<ContactForm, Value = SharedString>,
{
    let Some(rule) = field.rule() else {
        return Ok(());
    };
    form.register_field_validator(lens, rule)?;
    form.register_required_field(lens)
}
