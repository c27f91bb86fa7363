//! Fallback of the root `ErrorBoundary`.

use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Messages of all captured errors, in no particular order.
pub fn error_messages(errors: &Errors) -> Vec<String> {
    errors
        .clone()
        .into_iter()
        .map(|(_, error)| error.to_string())
        .collect()
}

/// Logs every captured error to the console. Returns how many were logged.
pub fn report_errors(errors: &Errors) -> usize {
    let messages = error_messages(errors);
    for message in &messages {
        log::error!("Unhandled render error: {}", message);
    }
    messages.len()
}

/// Clears the boundary's errors, which makes it render its children again.
pub fn reset_errors(errors: &ArcRwSignal<Errors>) {
    errors.set(Errors::default());
}

/// Retry action: hands control back to the boundary through `reset`.
pub fn retry(reset: impl FnOnce()) {
    log::info!("Retrying after render error");
    reset();
}

#[component]
pub fn GlobalError(errors: ArcRwSignal<Errors>) -> impl IntoView {
    // The component body runs once per mount.
    errors.with_untracked(report_errors);

    let on_retry = Callback::new(move |_: leptos::ev::MouseEvent| {
        retry(|| reset_errors(&errors));
    });

    view! {
        <div class="fallback-page" role="alert">
            {icon("alert-triangle")}
            <h1 class="fallback-page__title">"Something went wrong"</h1>
            <p class="fallback-page__text">
                "An unexpected error occurred. Please try again."
            </p>
            <div class="fallback-page__actions">
                <Button on_click=on_retry>"Try again"</Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, Once};

    /// Keeps every log line so tests can count their own messages.
    struct CapturingLogger {
        lines: Mutex<Vec<String>>,
    }

    impl log::Log for CapturingLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(format!("{} {}", record.level(), record.args()));
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CapturingLogger = CapturingLogger {
        lines: Mutex::new(Vec::new()),
    };
    static INIT: Once = Once::new();

    fn install_logger() {
        INIT.call_once(|| {
            log::set_logger(&LOGGER).unwrap();
            log::set_max_level(log::LevelFilter::Trace);
        });
    }

    fn lines_containing(needle: &str) -> Vec<String> {
        LOGGER
            .lines
            .lock()
            .unwrap()
            .iter()
            .filter(|line| line.contains(needle))
            .cloned()
            .collect()
    }

    fn errors_with(message: &str) -> Errors {
        let mut errors = Errors::default();
        errors.insert_with_default_key(std::io::Error::new(
            std::io::ErrorKind::Other,
            message.to_string(),
        ));
        errors
    }

    #[test]
    fn test_error_messages() {
        assert!(error_messages(&Errors::default()).is_empty());
        assert_eq!(error_messages(&errors_with("boom")), vec!["boom".to_string()]);
    }

    #[test]
    fn test_mount_logs_each_error_once() {
        install_logger();
        let errors = ArcRwSignal::new(errors_with("database unreachable"));

        let logged = errors.with_untracked(report_errors);

        assert_eq!(logged, 1);
        assert_eq!(
            lines_containing("database unreachable"),
            vec!["ERROR Unhandled render error: database unreachable".to_string()]
        );
    }

    #[test]
    fn test_no_errors_logs_nothing() {
        install_logger();
        assert_eq!(report_errors(&Errors::default()), 0);
    }

    #[test]
    fn test_retry_calls_reset_once() {
        install_logger();
        let mut calls = 0;

        retry(|| calls += 1);

        assert_eq!(calls, 1);
    }

    #[test]
    fn test_retry_clears_errors() {
        let errors = ArcRwSignal::new(errors_with("boom"));
        assert!(!errors.with_untracked(Errors::is_empty));

        retry(|| reset_errors(&errors));

        assert!(errors.with_untracked(Errors::is_empty));
    }
}
