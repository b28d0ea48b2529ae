//! Text or JSON rendering of results and error reports.

use serde::Serialize;
use shared::error::{ErrorCategory, ErrorReport};

use crate::config::EventFormat;

/// Encodes `value` as one JSON line, logging instead of failing.
pub fn json_line<T: Serialize + ?Sized>(value: &T) -> Option<String> {
    serde_json::to_string(value)
        .map_err(|error| tracing::error!(%error, "failed to encode output"))
        .ok()
}

/// The message in text mode; the `{code, message}` report in JSON mode.
pub fn report_line(format: EventFormat, report: &ErrorReport) -> String {
    match format {
        EventFormat::Text => report.message.clone(),
        EventFormat::Json => json_line(report).unwrap_or_else(|| report.message.clone()),
    }
}

pub fn error_line(format: EventFormat, err: &dyn ErrorCategory) -> String {
    report_line(format, &ErrorReport::from(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use countdown::CountdownError;
    use page::PageError;
    use shared::domain::{ItemId, RunId};

    #[test]
    fn text_mode_prints_the_bare_message() {
        assert_eq!(
            error_line(EventFormat::Text, &CountdownError::NotRunning),
            "no countdown is running"
        );
    }

    #[test]
    fn json_mode_carries_the_error_category() {
        let busy = CountdownError::AlreadyRunning {
            run_id: RunId::new(),
        };
        let line = error_line(EventFormat::Json, &busy);
        assert!(line.starts_with(r#"{"code":"conflict","message":"countdown "#));

        assert_eq!(
            error_line(EventFormat::Json, &PageError::UnknownItem(ItemId(4))),
            r#"{"code":"not_found","message":"no list item with id 4"}"#
        );
    }
}
