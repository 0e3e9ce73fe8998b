use inquire::{Confirm, Text};

use crate::form::{parse_checkbox, FieldKind, FieldName, FieldError, FormFieldSource, Presets};

/// Интерактивная форма в терминале.
///
/// Поля, заданные заранее, не запрашиваются. Остальные спрашиваются у
/// пользователя в момент чтения.
pub struct PromptForm {
    presets: Presets,
}

impl PromptForm {
    pub fn new(presets: Presets) -> Self {
        Self { presets }
    }
}

impl FormFieldSource for PromptForm {
    fn text(&self, field: FieldName) -> Result<String, FieldError> {
        if let Some(v) = self.presets.get(&field) {
            return Ok(v.clone());
        }

        let mut prompt = Text::new(field.label());

        if field.kind() == FieldKind::OptionalText {
            prompt = prompt.with_help_message("leave empty if unknown");
        }

        Ok(prompt.prompt()?)
    }

    fn checked(&self, field: FieldName) -> Result<bool, FieldError> {
        if let Some(v) = self.presets.get(&field) {
            return parse_checkbox(field, v);
        }

        let value = Confirm::new(field.label()).with_default(false).prompt()?;

        Ok(value)
    }
}
