use log::{debug, error, info};

use crate::{
    api::{Rejection, Transport, TransportError},
    form::{read_submission, FieldError, FormFieldSource},
    model::CafeSubmission,
    notify::{NotificationSink, UNEXPECTED_ERROR_MESSAGE},
};

pub const CAFES_PATH: &str = "/api/cafes";

/// Событие отправки формы.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Отменяет действие по умолчанию: форму отправляет обработчик.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Чем закончилась отправка формы.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// АПИ приняло кафе и вернуло этот документ.
    Created(serde_json::Value),

    /// АПИ отказало с этим сообщением.
    Rejected(String),

    /// Запрос не удался, либо ответ не разобрать.
    Failed,
}

impl Outcome {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Обработчик отправки формы добавления кафе.
///
/// Один вызов `handle` это одно чтение формы, один запрос и одно уведомление.
/// Повторов, таймаутов и отмены нет: чтобы попробовать снова, форму
/// отправляют ещё раз.
pub struct SubmitHandler<'a, T: Transport, N: NotificationSink> {
    transport: &'a T,
    sink: &'a N,
}

impl<'a, T: Transport, N: NotificationSink> SubmitHandler<'a, T, N> {
    pub fn new(transport: &'a T, sink: &'a N) -> Self {
        Self { transport, sink }
    }

    /// Обрабатывает отправку формы.
    ///
    /// Ошибка возвращается только если не удалось прочитать форму. В этом
    /// случае запрос не отправляется и уведомление не показывается.
    pub fn handle<F: FormFieldSource + ?Sized>(
        &self,
        event: &mut SubmitEvent,
        form: &F,
    ) -> Result<Outcome, FieldError> {
        event.prevent_default();

        let submission = read_submission(form)?;

        debug!("Отправляем кафе {:?}", submission);

        let outcome = match self.send(&submission) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Не удалось добавить кафе: {:#}", anyhow::Error::from(e));
                Outcome::Failed
            }
        };

        match &outcome {
            Outcome::Created(result) => {
                self.sink.notify_success();
                info!("Ответ АПИ: {}", result);
            }
            Outcome::Rejected(message) => {
                self.sink.notify_failure(&format!("Error: {}", message));
            }
            Outcome::Failed => {
                self.sink.notify_failure(UNEXPECTED_ERROR_MESSAGE);
            }
        }

        Ok(outcome)
    }

    fn send(&self, submission: &CafeSubmission) -> Result<Outcome, SubmitError> {
        let body = serde_json::to_string(submission).map_err(SubmitError::Serialize)?;

        let resp = self.transport.post_json(CAFES_PATH, body)?;

        if resp.is_success() {
            let result = serde_json::from_str(&resp.body).map_err(SubmitError::MalformedBody)?;
            return Ok(Outcome::Created(result));
        }

        let rejection: Rejection =
            serde_json::from_str(&resp.body).map_err(SubmitError::MalformedBody)?;

        Ok(Outcome::Rejected(rejection.error))
    }
}

#[derive(Debug, thiserror::Error)]
enum SubmitError {
    #[error("serialize cafe")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("malformed response body")]
    MalformedBody(#[source] serde_json::Error),
}
