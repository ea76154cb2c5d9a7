mod error_text;
mod format;
mod insights_text;
mod json;
mod mode;
mod notice_text;
pub mod palette;
mod summary_text;
mod theme_text;
mod transactions_text;

use std::io;

use pocketbook_client::{ClientError, SuccessEnvelope};

pub use mode::{OutputMode, mode_for_command};
use palette::Palette;

use crate::stdout_io::write_stdout_line;

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode, palette: &Palette) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success, palette)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    write_stdout_line(&body)
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    write_stdout_line(&body)
}

fn render_text_success(success: &SuccessEnvelope, palette: &Palette) -> io::Result<String> {
    let data = &success.data;
    match success.command.as_str() {
        "add" | "edit" | "delete" => transactions_text::render_change(data, palette),
        "list" => transactions_text::render_list(data, palette),
        "categories" => transactions_text::render_categories(data),
        "clear" => notice_text::render_notice(data, palette),
        "export" => notice_text::render_export(data, palette),
        "summary" => summary_text::render_summary(data, palette),
        "monthly" => summary_text::render_monthly(data, palette),
        "insights" => insights_text::render_insights(data, palette),
        "theme" => theme_text::render_theme(data, palette),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}
