//! Interactive session: one command per line, countdown ticks keep arriving
//! while the prompt waits for the next command.

use std::sync::Arc;

use anyhow::Context;
use countdown::{CountdownController, CountdownError, RunHandle};
use lessons::{
    classify_number, convert_temperature, format_string, multiplication_table, strings,
    TemperatureUnit,
};
use page::{ElementForm, Page, Theme};
use shared::{
    domain::ItemId,
    error::{ErrorCategory, ErrorCode, ErrorReport},
    input::parse_integer,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::{
    config::EventFormat,
    output::{error_line, report_line},
};

const BUSY_MESSAGE: &str = "the start button is disabled while a countdown runs";

const HELP: &[&str] = &[
    "number <value>             classify a number",
    "format <text>              capitalize a string",
    "temp <value> <c|f>         convert a temperature",
    "table <1-10>               print a multiplication table",
    "countdown <1-60>           start the countdown",
    "cancel                     stop the running countdown",
    "status                     show whether a countdown is running",
    "theme                      toggle light/dark mode",
    "add <text>                 add a list item",
    "delete <id>                delete a list item",
    "list                       show the list",
    "create <tag> <text>        create a page element",
    "elements                   show created elements as HTML",
    "help                       show this help",
    "quit                       leave the session",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Number(String),
    Format(String),
    Temperature { value: String, unit: String },
    Table(String),
    Countdown(String),
    Cancel,
    Status,
    Theme,
    Add(String),
    Delete(String),
    List,
    Create { element_type: String, text: String },
    Elements,
    Help,
    Quit,
    Unknown(String),
}

impl SessionCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Format(_) => "format",
            Self::Temperature { .. } => "temp",
            Self::Table(_) => "table",
            Self::Countdown(_) => "countdown",
            Self::Cancel => "cancel",
            Self::Status => "status",
            Self::Theme => "theme",
            Self::Add(_) => "add",
            Self::Delete(_) => "delete",
            Self::List => "list",
            Self::Create { .. } => "create",
            Self::Elements => "elements",
            Self::Help => "help",
            Self::Quit => "quit",
            Self::Unknown(_) => "unknown",
        }
    }
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<SessionCommand> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return None;
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "number" => SessionCommand::Number(rest.to_string()),
        "format" => SessionCommand::Format(rest.to_string()),
        "temp" | "temperature" => {
            let rest = rest.trim();
            let (value, unit) = rest
                .rsplit_once(char::is_whitespace)
                .unwrap_or((rest, "celsius"));
            SessionCommand::Temperature {
                value: value.trim().to_string(),
                unit: unit.trim().to_string(),
            }
        }
        "table" => SessionCommand::Table(rest.to_string()),
        "countdown" | "start" => SessionCommand::Countdown(rest.to_string()),
        "cancel" | "stop" => SessionCommand::Cancel,
        "status" => SessionCommand::Status,
        "theme" => SessionCommand::Theme,
        "add" => SessionCommand::Add(rest.to_string()),
        "delete" | "remove" => SessionCommand::Delete(rest.to_string()),
        "list" => SessionCommand::List,
        "create" => {
            let rest = rest.trim_start();
            let (element_type, text) = rest
                .split_once(char::is_whitespace)
                .unwrap_or((rest, ""));
            SessionCommand::Create {
                element_type: element_type.to_string(),
                text: text.to_string(),
            }
        }
        "elements" => SessionCommand::Elements,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        _ => SessionCommand::Unknown(word.to_string()),
    };
    Some(command)
}

pub struct Session {
    controller: Arc<CountdownController>,
    page: Page,
    last_run: Option<RunHandle>,
    /// Errors are printed as `{code, message}` JSON reports in JSON mode.
    format: EventFormat,
}

impl Session {
    pub fn new(controller: Arc<CountdownController>, theme: Theme, format: EventFormat) -> Self {
        Self {
            controller,
            page: Page::with_theme(theme),
            last_run: None,
            format,
        }
    }

    fn error(&self, err: &dyn ErrorCategory) -> Vec<String> {
        vec![error_line(self.format, err)]
    }

    fn invalid(&self, message: String) -> Vec<String> {
        vec![report_line(
            self.format,
            &ErrorReport::new(ErrorCode::Validation, message),
        )]
    }

    /// Runs one command and returns the lines to print. Countdown progress
    /// is not part of the result; it goes to the controller's surface.
    pub async fn execute(&mut self, command: SessionCommand) -> Vec<String> {
        debug!(command = command.name(), "session command");
        match command {
            SessionCommand::Number(raw) => match classify_number(&raw) {
                Ok(report) => vec![report.to_string()],
                Err(err) => self.error(&err),
            },
            SessionCommand::Format(raw) => match (self.format, format_string(&raw)) {
                (EventFormat::Json, Err(err)) => self.error(&err),
                _ => vec![strings::render(&raw)],
            },
            SessionCommand::Temperature { value, unit } => {
                let converted = unit
                    .parse::<TemperatureUnit>()
                    .and_then(|unit| convert_temperature(&value, unit));
                match converted {
                    Ok(conversion) => vec![conversion.to_string()],
                    Err(err) => self.error(&err),
                }
            }
            SessionCommand::Table(raw) => match multiplication_table(&raw) {
                Ok(table) => table.lines().collect(),
                Err(err) => self.error(&err),
            },
            SessionCommand::Countdown(raw) => self.start_countdown(&raw).await,
            SessionCommand::Cancel => match self.controller.cancel().await {
                Ok(run_id) => vec![format!("cancelling countdown {run_id}")],
                Err(err) => self.error(&err),
            },
            SessionCommand::Status => vec![match self.controller.active_run().await {
                Some(run_id) => format!("countdown {run_id} is running"),
                None => "countdown is idle".to_string(),
            }],
            SessionCommand::Theme => {
                let theme = self.page.theme.toggle();
                vec![format!(
                    "theme: {theme} (button: {})",
                    self.page.theme.button_label()
                )]
            }
            SessionCommand::Add(mut text) => match self.page.list.add(&mut text) {
                Some(id) => vec![format!("added item {id}")],
                None => Vec::new(),
            },
            SessionCommand::Delete(raw) => {
                let removed = parse_integer(&raw)
                    .ok()
                    .and_then(|id| u64::try_from(id).ok())
                    .map(ItemId)
                    .map(|id| self.page.list.remove(id));
                match removed {
                    Some(Ok(item)) => vec![format!("deleted item {}: {}", item.id, item.text)],
                    Some(Err(err)) => self.error(&err),
                    None => self.invalid(format!("'{}' is not a list item id", raw.trim())),
                }
            }
            SessionCommand::List => {
                if self.page.list.is_empty() {
                    return vec!["(list is empty)".to_string()];
                }
                self.page
                    .list
                    .items()
                    .iter()
                    .map(|item| format!("{}. {} [Delete]", item.id, item.text))
                    .collect()
            }
            SessionCommand::Create { element_type, text } => {
                let mut form = ElementForm::new(element_type, text);
                let created = self.page.elements.create(&mut form).map(|e| e.to_html());
                match created {
                    Ok(html) => vec![html],
                    Err(err) => self.error(&err),
                }
            }
            SessionCommand::Elements => self
                .page
                .elements
                .elements()
                .iter()
                .map(|element| element.to_html())
                .collect(),
            SessionCommand::Help => HELP.iter().map(|line| line.to_string()).collect(),
            SessionCommand::Quit => Vec::new(),
            SessionCommand::Unknown(word) => {
                self.invalid(format!("unknown command '{word}', type 'help' for a list"))
            }
        }
    }

    async fn start_countdown(&mut self, raw: &str) -> Vec<String> {
        match self.controller.trigger(raw).await {
            Ok(handle) => {
                self.last_run = Some(handle);
                Vec::new()
            }
            // the surface already shows the rejection
            Err(CountdownError::InvalidDuration { .. }) => Vec::new(),
            Err(CountdownError::AlreadyRunning { .. }) if self.format == EventFormat::Text => {
                vec![BUSY_MESSAGE.to_string()]
            }
            Err(err) => self.error(&err),
        }
    }

    /// Waits for the last countdown, cancelling it first when asked to.
    pub async fn shutdown(&mut self, cancel: bool) {
        let Some(handle) = self.last_run.take() else {
            return;
        };
        if cancel && !handle.is_finished() {
            let _ = handle.cancel().await;
        }
        if let Err(error) = handle.join().await {
            warn!(%error, "countdown did not finish cleanly");
        }
    }
}

/// Reads commands until `quit` or end of input.
pub async fn run<R: AsyncBufRead + Unpin>(mut session: Session, input: R) -> anyhow::Result<()> {
    let mut lines = input.lines();
    let mut quit = false;
    while let Some(line) = lines
        .next_line()
        .await
        .context("failed to read session input")?
    {
        let Some(command) = parse_command(&line) else {
            continue;
        };
        if command == SessionCommand::Quit {
            quit = true;
            break;
        }
        for output in session.execute(command).await {
            println!("{output}");
        }
    }
    session.shutdown(quit).await;
    Ok(())
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
