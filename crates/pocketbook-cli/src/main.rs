mod cli;
mod dispatch;
mod logging;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use output::palette::Palette;
use pocketbook_client::state::resolve_tracker_home;
use pocketbook_client::storage::FileStorage;
use pocketbook_client::theme::{self, Theme};
use pocketbook_client::{ClientError, SuccessEnvelope};
use stdout_io::write_stdout_text;

const TOP_LEVEL_HELP: &str = "Pocketbook - track income and expenses from the terminal

USAGE: pocketbook <command>

Record:
  pocketbook add \"Coffee\" 4.50 --category food              Record an expense (the default type)
  pocketbook add \"Salary\" 3000 --type income                Record income
  pocketbook edit <id> --amount 5.25                        Change fields of a transaction
  pocketbook delete <id>                                    Remove one transaction
  pocketbook clear --yes                                    Remove every transaction

Review:
  pocketbook list [--type T] [--category C] [--month YYYY-MM] [--search S]
  pocketbook summary                                        Income, expenses, balance, savings rate
  pocketbook insights [--month YYYY-MM]                     Category breakdown for a month
  pocketbook monthly                                        Totals per month
  pocketbook categories                                     Categories in use and suggestions

Other:
  pocketbook export [--output PATH|-]                       Write all transactions to CSV
  pocketbook theme [show|set light|dark|toggle]             Color theme for terminal output

Every command accepts --json for machine-readable output.
Data lives in ~/.pocketbook unless POCKETBOOK_HOME is set.
";

fn main() -> ExitCode {
    logging::init();
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 || is_top_level_help_request(&raw_args) {
        if write_stdout_text(TOP_LEVEL_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let cli = match cli::Cli::try_parse() {
        Ok(value) => value,
        Err(err) => return Err(report_parse_error(&err, &raw_args)),
    };
    let mode = output::mode_for_command(&cli.command);

    match dispatch::dispatch(&cli) {
        Ok(success) => {
            let palette = palette_for_output();
            if output::print_success(&success, mode, &palette).is_err() {
                return Err(ExitCode::from(2));
            }
            exit_code_for_success(&success)
        }
        Err(error) => {
            tracing::debug!("command failed with {}: {}", error.code, error.message);
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

fn report_parse_error(err: &clap::Error, raw_args: &[String]) -> ExitCode {
    if matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    ) {
        if write_stdout_text(&err.to_string()).is_err() {
            return ExitCode::from(2);
        }
        return ExitCode::SUCCESS;
    }

    let command_hint = command_from_args(raw_args);
    let clean_message = strip_clap_boilerplate(&err.to_string());
    let parse_error = ClientError::invalid_argument_for_command(&clean_message, command_hint);
    let mode = infer_requested_output_mode(raw_args);
    if output::print_failure(&parse_error, mode).is_err() {
        return ExitCode::from(2);
    }
    ExitCode::from(1)
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h" | "help")
}

/// Strips clap's trailing boilerplate (Usage line, "For more information" hint)
/// so our "What to do next" section is the single source of guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

/// First argument after the binary name, when it names a known command.
fn command_from_args(raw_args: &[String]) -> Option<&'static str> {
    let first = raw_args.get(1)?;
    [
        "add",
        "edit",
        "delete",
        "clear",
        "list",
        "summary",
        "insights",
        "monthly",
        "categories",
        "export",
        "theme",
    ]
    .into_iter()
    .find(|command| *command == first.as_str())
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

/// Theme is resolved after the command ran so `theme set` output already
/// uses the new colors.
fn palette_for_output() -> Palette {
    let theme = resolve_tracker_home(None)
        .map(|home| theme::resolve(&FileStorage::new(&home)).theme)
        .unwrap_or(Theme::Light);
    Palette::detect(theme)
}

fn exit_code_for_success(success: &SuccessEnvelope) -> Result<ExitCode, ExitCode> {
    if success.has_error_notification() {
        return Err(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}

fn exit_code_for_error(error: &ClientError) -> ExitCode {
    if is_internal_error(error) {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn is_internal_error(error: &ClientError) -> bool {
    error.code.starts_with("internal_") || error.code == "tracker_home_unavailable"
}
