use std::path::PathBuf;

use pocketbook_client::commands;
use pocketbook_client::commands::add::AddRequest;
use pocketbook_client::commands::export::ExportTarget;
use pocketbook_client::commands::theme::ThemeAction;
use pocketbook_client::model::{Filters, TransactionUpdate};
use pocketbook_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands, ThemeCommand};

pub const STDOUT_PATH: &str = "-";

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Add {
            description,
            amount,
            kind,
            category,
            date,
            ..
        } => commands::add::run(AddRequest {
            description: description.clone(),
            amount: *amount,
            kind: *kind,
            category: category.clone(),
            date: *date,
        }),
        Commands::Edit {
            id,
            description,
            amount,
            kind,
            category,
            date,
            ..
        } => commands::edit::run(
            id,
            &TransactionUpdate {
                description: description.clone(),
                amount: *amount,
                kind: *kind,
                category: category.clone(),
                date: *date,
            },
        ),
        Commands::Delete { id, .. } => commands::delete::run(id),
        Commands::Clear { yes, .. } => commands::clear::run(*yes),
        Commands::List {
            kind,
            category,
            month,
            search,
            ..
        } => commands::list::run(Filters {
            kind: *kind,
            category: category.clone(),
            month: month.clone(),
            search: search.clone(),
        }),
        Commands::Summary { .. } => commands::summary::run(),
        Commands::Insights { month, .. } => commands::insights::run(month.as_deref()),
        Commands::Monthly { .. } => commands::monthly::run(),
        Commands::Categories { .. } => commands::categories::run(),
        Commands::Export { output, .. } => commands::export::run(export_target(output.as_deref())),
        Commands::Theme { command, .. } => commands::theme::run(theme_action(command.as_ref())),
    }
}

fn export_target(output: Option<&str>) -> ExportTarget {
    match output {
        None => ExportTarget::DefaultFile,
        Some(STDOUT_PATH) => ExportTarget::Inline,
        Some(path) => ExportTarget::File(PathBuf::from(path)),
    }
}

fn theme_action(command: Option<&ThemeCommand>) -> ThemeAction {
    match command {
        None | Some(ThemeCommand::Show) => ThemeAction::Show,
        Some(ThemeCommand::Set { theme }) => ThemeAction::Set(*theme),
        Some(ThemeCommand::Toggle) => ThemeAction::Toggle,
    }
}
