use std::{collections::HashMap, str::FromStr};

use enum_iterator::all;

use crate::model::{CafeSubmission, FilledText};

/// Значения полей, заданные заранее, например из аргументов командной строки.
pub type Presets = HashMap<FieldName, String>;

/// Все поля формы добавления кафе.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, std::hash::Hash, derive_more::Display, enum_iterator::Sequence,
)]
pub enum FieldName {
    #[display(fmt = "name")]
    Name,
    #[display(fmt = "map_url")]
    MapUrl,
    #[display(fmt = "location")]
    Location,
    #[display(fmt = "has_sockets")]
    HasSockets,
    #[display(fmt = "has_toilet")]
    HasToilet,
    #[display(fmt = "has_wifi")]
    HasWifi,
    #[display(fmt = "can_take_calls")]
    CanTakeCalls,
    #[display(fmt = "seats")]
    Seats,
    #[display(fmt = "coffee_price")]
    CoffeePrice,
}

/// Тип поля ввода.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Обычное текстовое поле.
    Text,

    /// Текстовое поле, пустое значение которого означает "не указано".
    OptionalText,

    /// Чекбокс.
    Checkbox,
}

impl FieldName {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Name | Self::MapUrl | Self::Location => FieldKind::Text,
            Self::Seats | Self::CoffeePrice => FieldKind::OptionalText,
            Self::HasSockets | Self::HasToilet | Self::HasWifi | Self::CanTakeCalls => {
                FieldKind::Checkbox
            }
        }
    }

    /// Подпись поля для пользователя.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Cafe name",
            Self::MapUrl => "Map URL",
            Self::Location => "Location",
            Self::HasSockets => "Has sockets",
            Self::HasToilet => "Has toilet",
            Self::HasWifi => "Has wifi",
            Self::CanTakeCalls => "Can take calls",
            Self::Seats => "Seats",
            Self::CoffeePrice => "Coffee price",
        }
    }
}

impl FromStr for FieldName {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all::<FieldName>()
            .find(|f| f.to_string() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_owned()))
    }
}

/// Источник значений полей формы.
///
/// Значения читаются по стабильному имени поля в момент отправки формы.
pub trait FormFieldSource {
    /// Текущее значение текстового поля.
    fn text(&self, field: FieldName) -> Result<String, FieldError>;

    /// Текущее состояние чекбокса.
    fn checked(&self, field: FieldName) -> Result<bool, FieldError>;
}

/// Читает все поля формы и собирает из них кафе.
pub fn read_submission<F: FormFieldSource + ?Sized>(
    form: &F,
) -> Result<CafeSubmission, FieldError> {
    Ok(CafeSubmission {
        name: form.text(FieldName::Name)?,
        map_url: form.text(FieldName::MapUrl)?,
        location: form.text(FieldName::Location)?,
        has_sockets: form.checked(FieldName::HasSockets)?,
        has_toilet: form.checked(FieldName::HasToilet)?,
        has_wifi: form.checked(FieldName::HasWifi)?,
        can_take_calls: form.checked(FieldName::CanTakeCalls)?,
        seats: FilledText::from_input(form.text(FieldName::Seats)?),
        coffee_price: FilledText::from_input(form.text(FieldName::CoffeePrice)?),
    })
}

/// Форма, все значения которой известны заранее.
/// Не заданные поля считаются пустыми, а чекбоксы не отмеченными.
#[derive(Debug, Default)]
pub struct PresetForm {
    values: Presets,
}

impl PresetForm {
    pub fn new(values: Presets) -> Self {
        Self { values }
    }
}

impl FormFieldSource for PresetForm {
    fn text(&self, field: FieldName) -> Result<String, FieldError> {
        Ok(self.values.get(&field).cloned().unwrap_or_default())
    }

    fn checked(&self, field: FieldName) -> Result<bool, FieldError> {
        self.values
            .get(&field)
            .map_or(Ok(false), |v| parse_checkbox(field, v))
    }
}

/// Разбирает значение чекбокса, заданное строкой.
pub fn parse_checkbox(field: FieldName, value: &str) -> Result<bool, FieldError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(FieldError::InvalidCheckbox {
            field,
            value: value.to_owned(),
        }),
    }
}

/// Разбирает присваивание вида `field=value`.
pub fn parse_preset(s: &str) -> Result<(FieldName, String), FieldError> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| FieldError::MalformedPreset(s.to_owned()))?;

    let field: FieldName = name.trim().parse()?;

    // Ошибку в чекбоксе лучше показать сразу, а не после заполнения формы.
    if field.kind() == FieldKind::Checkbox {
        parse_checkbox(field, value)?;
    }

    Ok((field, value.to_owned()))
}

#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error("unknown field \"{0}\"")]
    UnknownField(String),

    #[error("expected field=value, got \"{0}\"")]
    MalformedPreset(String),

    #[error("field {field} expects true or false, got \"{value}\"")]
    InvalidCheckbox { field: FieldName, value: String },

    #[error("read form input")]
    Prompt(#[from] inquire::InquireError),
}
