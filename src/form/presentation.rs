use gpui::SharedString;

use super::controller::{FieldKey, FormController, FormResult, read_lock};
use super::validation::{FieldLens, FormModel, ValidationError};

/// Everything a rendering layer needs to draw one bound field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldPresentation<V> {
    pub key: FieldKey,
    pub value: V,
    pub required: bool,
    pub error: Option<SharedString>,
}

impl<T, E> FormController<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: ValidationError,
{
    pub fn field_error_for_display<L>(&self, lens: L) -> FormResult<Option<SharedString>>
    where
        L: FieldLens<T>,
    {
        self.display_error_message(lens.key())
    }

    pub fn present<L>(&self, lens: L) -> FormResult<FieldPresentation<L::Value>>
    where
        L: FieldLens<T>,
    {
        let key = lens.key();
        let value = lens
            .get(&read_lock(&self.state, "reading value for presentation")?.model)
            .clone();
        let required =
            read_lock(&self.required_fields, "reading required fields for presentation")?
                .contains(&key);
        Ok(FieldPresentation {
            key,
            value,
            required,
            error: self.display_error_message(key)?,
        })
    }

    /// Errors currently shown to the user, in field declaration order.
    pub fn visible_errors(&self) -> FormResult<Vec<(FieldKey, SharedString)>>
    where
        T: FormModel,
    {
        let mut visible = Vec::new();
        for key in T::FIELD_KEYS {
            if let Some(message) = self.display_error_message(*key)? {
                visible.push((*key, message));
            }
        }
        Ok(visible)
    }

    fn display_error_message(&self, key: FieldKey) -> FormResult<Option<SharedString>> {
        let state = read_lock(&self.state, "reading display error message")?;
        let Some(meta) = state.field_meta.get(&key) else {
            return Ok(None);
        };
        if !meta.touched && state.submit_count == 0 {
            return Ok(None);
        }
        Ok(meta.errors.first().map(ValidationError::message))
    }
}
