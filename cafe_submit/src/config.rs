use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::BaseUrl;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Config {
    /// Адрес, на котором живёт АПИ кафе.
    pub base_url: String,

    /// Значение cookie `session` залогиненного пользователя.
    /// Без него сервер не даст добавить кафе.
    #[serde(default)]
    pub session_cookie: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            session_cookie: None,
        }
    }
}

impl Config {
    pub fn base_url(&self) -> anyhow::Result<BaseUrl> {
        Ok(BaseUrl::new(self.base_url.as_str())?)
    }
}

/// Загружает конфигурацию.
pub fn load(path: PathBuf) -> anyhow::Result<Config> {
    let mut cfg: Config = confy::load_path(path)?;

    normalize(&mut cfg);

    Ok(cfg)
}

pub fn normalize(cfg: &mut Config) {
    cfg.base_url = cfg.base_url.trim().trim_end_matches('/').to_owned();

    if cfg.session_cookie.as_deref().is_some_and(|s| s.trim().is_empty()) {
        cfg.session_cookie = None;
    }
}
