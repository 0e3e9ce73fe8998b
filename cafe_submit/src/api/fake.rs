use std::{cell::RefCell, collections::VecDeque};

use reqwest::StatusCode;

use super::{Response, Transport, TransportError};

/// Записанный запрос.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: &'static str,
    pub path: String,
    pub body: Option<String>,
}

/// Транспорт с заранее заданными ответами.
#[derive(Default)]
pub struct FakeTransport {
    responses: RefCell<VecDeque<Result<Response, TransportError>>>,
    requests: RefCell<Vec<Request>>,
}

impl FakeTransport {
    pub fn respond(self, status: StatusCode, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(Response {
            status,
            body: body.to_owned(),
        }));
        self
    }

    pub fn fail(self) -> Self {
        self.responses.borrow_mut().push_back(Err(send_error()));
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    fn next(&self, request: Request) -> Result<Response, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .expect("no scripted response left")
    }
}

impl Transport for FakeTransport {
    fn post_json(&self, path: &str, body: String) -> Result<Response, TransportError> {
        self.next(Request {
            method: "POST",
            path: path.to_owned(),
            body: Some(body),
        })
    }

    fn get(&self, path: &str) -> Result<Response, TransportError> {
        self.next(Request {
            method: "GET",
            path: path.to_owned(),
            body: None,
        })
    }
}

/// Настоящая ошибка отправки: reqwest откладывает разбор URL до `send`.
fn send_error() -> TransportError {
    let err = reqwest::blocking::Client::new()
        .get("not a url")
        .send()
        .unwrap_err();

    TransportError::Send(err)
}
