pub const SUCCESS_MESSAGE: &str = "Cafe added successfully!";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Способ показать пользователю результат отправки формы.
pub trait NotificationSink {
    fn notify_success(&self);

    fn notify_failure(&self, message: &str);
}

/// Выводит уведомления в терминал.
pub struct TerminalSink;

impl NotificationSink for TerminalSink {
    fn notify_success(&self) {
        println!("{}", SUCCESS_MESSAGE);
    }

    fn notify_failure(&self, message: &str) {
        eprintln!("{}", message);
    }
}
