use std::time::Duration;

use log::debug;
use reqwest::{
    header::{self, HeaderMap, HeaderValue, InvalidHeaderValue},
    Method, StatusCode,
};

use crate::model::BaseUrl;

/// Ответ АПИ, как он пришёл по сети.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: StatusCode,
    pub body: String,
}

impl Response {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Транспорт до АПИ кафе.
pub trait Transport {
    /// Отправляет JSON документ методом POST.
    fn post_json(&self, path: &str, body: String) -> Result<Response, TransportError>;

    fn get(&self, path: &str) -> Result<Response, TransportError>;
}

/// Транспорт поверх HTTP.
///
/// Делает ровно одну попытку на запрос и не ограничивает его время.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    base_url: BaseUrl,
}

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

impl HttpTransport {
    /// Создаёт новый инстанс транспорта.
    /// Если передана сессия, она уходит в каждом запросе в виде cookie.
    pub fn new(base_url: BaseUrl, session_cookie: Option<&str>) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();

        if let Some(session) = session_cookie {
            headers.insert(
                header::COOKIE,
                HeaderValue::from_str(&format!("session={}", session))?,
            );
        }

        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(None::<Duration>)
            .build()
            .map_err(TransportError::Build)?;

        Ok(Self { client, base_url })
    }

    fn request(
        &self,
        http_method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<Response, TransportError> {
        let url = self.base_url.join(path);
        let mut req_builder = self.client.request(http_method.clone(), &url);

        if let Some(b) = body {
            debug!("Тело запроса на {}: {}", url, b);
            req_builder = req_builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(b);
        }

        debug!("Запрос в АПИ: {} {}", http_method, url);
        let resp = req_builder.send()?;

        let status = resp.status();
        let body = resp.text()?;

        debug!("Ответ на {}: {} {}", url, status, body);

        Ok(Response { status, body })
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, path: &str, body: String) -> Result<Response, TransportError> {
        self.request(Method::POST, path, Some(body))
    }

    fn get(&self, path: &str) -> Result<Response, TransportError> {
        self.request(Method::GET, path, None)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("build http client")]
    Build(#[source] reqwest::Error),

    #[error("invalid session cookie")]
    InvalidCookie(#[from] InvalidHeaderValue),

    #[error("send request")]
    Send(#[from] reqwest::Error),
}
