use serde::Serialize;

use crate::newtype;

/// Кафе в том виде, в котором его заполнили в форме добавления.
///
/// Живёт ровно одну отправку формы: собирается из текущих значений полей,
/// сериализуется в тело запроса и выбрасывается.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CafeSubmission {
    /// Название кафе.
    pub name: String,

    /// Ссылка на кафе на карте.
    pub map_url: String,

    /// Район или адрес.
    pub location: String,

    pub has_sockets: bool,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub can_take_calls: bool,

    /// Количество мест. Пустое поле уходит как `null`.
    pub seats: Option<FilledText>,

    /// Цена кофе. Пустое поле уходит как `null`.
    pub coffee_price: Option<FilledText>,
}

newtype!(FilledText, filled_text_validate, FilledTextError);

fn filled_text_validate(value: &str) -> Result<(), FilledTextError> {
    if value.is_empty() {
        return Err(FilledTextError::Empty);
    }

    Ok(())
}

impl FilledText {
    /// Превращает значение поля ввода в необязательное значение.
    /// Пустое поле означает "значение не указано".
    pub fn from_input(value: String) -> Option<Self> {
        Self::new(value).ok()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FilledTextError {
    #[error("value is empty")]
    Empty,
}

newtype!(BaseUrl, base_url_validate, BaseUrlError);

fn base_url_validate(value: &str) -> Result<(), BaseUrlError> {
    let rest = value
        .strip_prefix("http://")
        .or_else(|| value.strip_prefix("https://"))
        .ok_or_else(|| BaseUrlError::UnsupportedScheme(value.to_owned()))?;

    if rest.is_empty() {
        return Err(BaseUrlError::MissingHost);
    }

    if value.ends_with('/') {
        return Err(BaseUrlError::TrailingSlash);
    }

    Ok(())
}

impl BaseUrl {
    /// Собирает полный URL для пути в АПИ.
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BaseUrlError {
    #[error("base url \"{0}\" should start with http:// or https://")]
    UnsupportedScheme(String),

    #[error("base url has no host")]
    MissingHost,

    #[error("base url should not end with a slash")]
    TrailingSlash,
}
