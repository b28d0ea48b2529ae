use std::{fmt::Display, path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::Context;
use clap::{Parser, Subcommand};
use countdown::{CountdownController, CountdownError, NullSurface};
use lessons::{
    classify_number, convert_temperature, format_string, multiplication_table, strings,
    TemperatureUnit,
};
use serde::Serialize;
use shared::error::ErrorCategory;
use tokio::{io::BufReader, task::JoinHandle};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod config;
mod output;
mod session;
mod surface;

use config::{load_settings, EventFormat, Settings};
use surface::{spawn_event_printer, TerminalSurface};

#[derive(Parser, Debug)]
#[command(name = "playground", about = "Small programs for learning the basics")]
struct Cli {
    /// Config file; defaults to ./playground.toml when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print results and countdown events as JSON lines
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Say whether a number is positive, negative or zero, and even or odd
    Number {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Trim a string and capitalize its first letter
    Format { text: String },
    /// Convert between Celsius and Fahrenheit
    Temperature {
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Unit of the given value
        #[arg(long, default_value = "celsius")]
        unit: TemperatureUnit,
    },
    /// Print the multiplication table of a number between 1 and 10
    Table {
        #[arg(allow_hyphen_values = true)]
        factor: String,
    },
    /// Count down from 1 to 60 seconds
    Countdown {
        #[arg(allow_hyphen_values = true)]
        seconds: String,
    },
    /// Read commands from stdin; type `help` for the list
    Session,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref())?;
    if cli.json {
        settings.event_format = EventFormat::Json;
    }
    init_tracing(&settings.log_filter);
    debug!(?settings, "settings loaded");

    let format = settings.event_format;
    let code = match cli.command {
        Command::Number { value } => emit(format, classify_number(&value)),
        Command::Format { text } => match format {
            EventFormat::Text => {
                println!("{}", strings::render(&text));
                ExitCode::SUCCESS
            }
            EventFormat::Json => emit(format, format_string(&text)),
        },
        Command::Temperature { value, unit } => emit(format, convert_temperature(&value, unit)),
        Command::Table { factor } => emit_table(format, &factor),
        Command::Countdown { seconds } => run_countdown(&settings, &seconds).await?,
        Command::Session => run_session(&settings).await?,
    };
    Ok(code)
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn emit<T, E>(format: EventFormat, result: Result<T, E>) -> ExitCode
where
    T: Serialize + Display,
    E: ErrorCategory,
{
    match (format, result) {
        (EventFormat::Text, Ok(value)) => println!("{value}"),
        (EventFormat::Json, Ok(value)) => print_json(&value),
        (format, Err(err)) => return emit_rejection(format, &err),
    }
    ExitCode::SUCCESS
}

fn emit_rejection(format: EventFormat, err: &dyn ErrorCategory) -> ExitCode {
    println!("{}", output::error_line(format, err));
    ExitCode::FAILURE
}

fn emit_table(format: EventFormat, raw: &str) -> ExitCode {
    match (format, multiplication_table(raw)) {
        (EventFormat::Text, Ok(table)) => table.lines().for_each(|line| println!("{line}")),
        (EventFormat::Json, Ok(table)) => print_json(&table),
        (format, Err(err)) => return emit_rejection(format, &err),
    }
    ExitCode::SUCCESS
}

fn print_json<T: Serialize>(value: &T) {
    if let Some(line) = output::json_line(value) {
        println!("{line}");
    }
}

fn build_controller(settings: &Settings) -> (Arc<CountdownController>, Option<JoinHandle<()>>) {
    match settings.event_format {
        EventFormat::Text => (
            CountdownController::with_tick(Arc::new(TerminalSurface::stdout()), settings.tick()),
            None,
        ),
        EventFormat::Json => {
            let controller = CountdownController::with_tick(Arc::new(NullSurface), settings.tick());
            let printer = spawn_event_printer(controller.subscribe_events());
            (controller, Some(printer))
        }
    }
}

async fn run_countdown(settings: &Settings, raw: &str) -> anyhow::Result<ExitCode> {
    let format = settings.event_format;
    let (controller, printer) = build_controller(settings);

    let code = match controller.trigger(raw).await {
        Ok(handle) => {
            let outcome = handle.join().await?;
            info!(?outcome, "countdown finished");
            ExitCode::SUCCESS
        }
        // the surface or event stream already carries the rejection
        Err(CountdownError::InvalidDuration { .. }) => ExitCode::FAILURE,
        Err(err) => emit_rejection(format, &err),
    };

    drop(controller);
    if let Some(printer) = printer {
        printer.await.context("event printer stopped unexpectedly")?;
    }
    Ok(code)
}

async fn run_session(settings: &Settings) -> anyhow::Result<ExitCode> {
    let (controller, printer) = build_controller(settings);
    let session = session::Session::new(controller, settings.initial_theme, settings.event_format);

    session::run(session, BufReader::new(tokio::io::stdin())).await?;

    if let Some(printer) = printer {
        printer.await.context("event printer stopped unexpectedly")?;
    }
    Ok(ExitCode::SUCCESS)
}
