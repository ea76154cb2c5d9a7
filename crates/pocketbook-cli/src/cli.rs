use std::str::FromStr;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use pocketbook_client::dates::{is_year_month, parse_transaction_date};
use pocketbook_client::model::{TransactionKind, TypeFilter};
use pocketbook_client::theme::Theme;
use rust_decimal::Decimal;

pub fn parse_iso_date(value: &str) -> Result<NaiveDate, String> {
    parse_transaction_date(value)
        .ok_or_else(|| "date must use YYYY-MM-DD format with valid calendar values".to_string())
}

pub fn parse_year_month(value: &str) -> Result<String, String> {
    if is_year_month(value) {
        return Ok(value.to_string());
    }
    Err("month must use YYYY-MM format with a real calendar month".to_string())
}

pub fn parse_amount(value: &str) -> Result<Decimal, String> {
    let amount = Decimal::from_str(value.trim())
        .map_err(|_| "amount must be a plain decimal number such as 4.50".to_string())?;
    if amount <= Decimal::ZERO {
        return Err("amount must be greater than zero".to_string());
    }
    Ok(amount)
}

pub fn parse_kind(value: &str) -> Result<TransactionKind, String> {
    TransactionKind::parse(value).ok_or_else(|| "type must be one of: income, expense".to_string())
}

pub fn parse_type_filter(value: &str) -> Result<TypeFilter, String> {
    TypeFilter::parse(value).ok_or_else(|| "type must be one of: all, income, expense".to_string())
}

pub fn parse_theme(value: &str) -> Result<Theme, String> {
    Theme::parse(value).ok_or_else(|| "theme must be one of: light, dark".to_string())
}

pub const ADD_AFTER_HELP: &str = "\
Examples:
  pocketbook add \"Coffee\" 4.50 --category food --date 2024-01-05
  pocketbook add \"Monthly salary\" 3000 --type income --category salary

Suggested categories:
  income:  salary, freelance, investment, gift, other
  expense: food, transport, entertainment, shopping, bills, healthcare, other
";

#[derive(Debug, Parser)]
#[command(
    name = "pocketbook",
    version,
    about = "track income and expenses from the terminal",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record a new income or expense.
    #[command(after_long_help = ADD_AFTER_HELP)]
    Add {
        description: String,
        #[arg(value_parser = parse_amount, allow_hyphen_values = true)]
        amount: Decimal,
        #[arg(long = "type", value_parser = parse_kind, default_value = "expense")]
        kind: TransactionKind,
        #[arg(long)]
        category: Option<String>,
        /// Defaults to today.
        #[arg(long, value_parser = parse_iso_date)]
        date: Option<NaiveDate>,
        #[arg(long)]
        json: bool,
    },
    /// Change fields of an existing transaction.
    Edit {
        id: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_parser = parse_amount, allow_hyphen_values = true)]
        amount: Option<Decimal>,
        #[arg(long = "type", value_parser = parse_kind)]
        kind: Option<TransactionKind>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_parser = parse_iso_date)]
        date: Option<NaiveDate>,
        #[arg(long)]
        json: bool,
    },
    Delete {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Delete every transaction.
    Clear {
        #[arg(long)]
        yes: bool,
        #[arg(long)]
        json: bool,
    },
    List {
        #[arg(long = "type", value_parser = parse_type_filter, default_value = "all")]
        kind: TypeFilter,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_parser = parse_year_month)]
        month: Option<String>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Totals across all transactions.
    Summary {
        #[arg(long)]
        json: bool,
    },
    /// Category breakdown for one month.
    Insights {
        /// Defaults to the current month.
        #[arg(long, value_parser = parse_year_month)]
        month: Option<String>,
        #[arg(long)]
        json: bool,
    },
    Monthly {
        #[arg(long)]
        json: bool,
    },
    Categories {
        #[arg(long)]
        json: bool,
    },
    /// Write all transactions to CSV.
    Export {
        /// File to write, or `-` for stdout.
        #[arg(long, short)]
        output: Option<String>,
        #[arg(long)]
        json: bool,
    },
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommand>,
        #[arg(long, global = true)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ThemeCommand {
    Show,
    Set {
        #[arg(value_parser = parse_theme)]
        theme: Theme,
    },
    Toggle,
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use pocketbook_client::model::{TransactionKind, TypeFilter};
    use pocketbook_client::theme::Theme;
    use rust_decimal::Decimal;

    use super::{Commands, ThemeCommand, parse_amount, parse_from, parse_iso_date};

    #[test]
    fn parse_command_paths() {
        let cases: [Vec<&str>; 16] = [
            vec!["pocketbook", "add", "Coffee", "4.50"],
            vec!["pocketbook", "add", "Salary", "3000", "--type", "income", "--json"],
            vec!["pocketbook", "add", "Bus", "2.75", "--category", "transport", "--date", "2024-01-05"],
            vec!["pocketbook", "edit", "txn_1", "--amount", "5"],
            vec!["pocketbook", "edit", "txn_1", "--description", "Latte", "--json"],
            vec!["pocketbook", "delete", "txn_1"],
            vec!["pocketbook", "clear", "--yes"],
            vec!["pocketbook", "list"],
            vec!["pocketbook", "list", "--type", "expense", "--month", "2024-01", "--search", "coffee"],
            vec!["pocketbook", "summary", "--json"],
            vec!["pocketbook", "insights", "--month", "2024-02"],
            vec!["pocketbook", "monthly"],
            vec!["pocketbook", "categories"],
            vec!["pocketbook", "export", "--output", "-"],
            vec!["pocketbook", "theme", "set", "dark"],
            vec!["pocketbook", "theme", "toggle", "--json"],
        ];

        for case in cases {
            let parsed = parse_from(case.clone());
            assert!(parsed.is_ok(), "failed to parse: {case:?}");
        }
    }

    #[test]
    fn add_defaults_to_expense_without_date() {
        let parsed = parse_from(["pocketbook", "add", "Coffee", "4.50"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::Add {
                    kind: TransactionKind::Expense,
                    date: None,
                    category: None,
                    json: false,
                    ..
                }
            ));
        }
    }

    #[test]
    fn list_type_defaults_to_all() {
        let parsed = parse_from(["pocketbook", "list"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::List {
                    kind: TypeFilter::All,
                    ..
                }
            ));
        }
    }

    #[test]
    fn theme_subcommand_is_optional() {
        let parsed = parse_from(["pocketbook", "theme"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(cli.command, Commands::Theme { command: None, .. }));
        }

        let set = parse_from(["pocketbook", "theme", "set", "DARK"]);
        assert!(set.is_ok());
        if let Ok(cli) = set {
            assert!(matches!(
                cli.command,
                Commands::Theme {
                    command: Some(ThemeCommand::Set { theme: Theme::Dark }),
                    ..
                }
            ));
        }
    }

    #[test]
    fn rejects_bad_values() {
        for case in [
            vec!["pocketbook", "add", "Coffee", "-4.50"],
            vec!["pocketbook", "add", "Coffee", "abc"],
            vec!["pocketbook", "add", "Coffee", "4", "--type", "transfer"],
            vec!["pocketbook", "add", "Coffee", "4", "--date", "2024-02-30"],
            vec!["pocketbook", "list", "--month", "2024-13"],
            vec!["pocketbook", "theme", "set", "sepia"],
        ] {
            let parsed = parse_from(case.clone());
            assert!(parsed.is_err(), "unexpectedly parsed: {case:?}");
            if let Err(error) = parsed {
                assert_eq!(error.kind(), ErrorKind::ValueValidation);
            }
        }
    }

    #[test]
    fn value_parsers() {
        assert_eq!(parse_amount("4.50"), Ok(Decimal::new(450, 2)));
        assert!(parse_amount("0").is_err());
        assert!(parse_iso_date("2024-02-29").is_ok());
        assert!(parse_iso_date("2024/02/29").is_err());
    }
}
