use std::fs;
use std::path::Path;
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

struct CliOutput {
    code: Option<i32>,
    stdout: String,
}

fn temp_workspace() -> Option<TempDir> {
    let created = tempfile::Builder::new().prefix("pocketbook-cli-test").tempdir();
    assert!(created.is_ok());
    created.ok()
}

fn run_cli(workspace: &Path, args: &[&str]) -> CliOutput {
    let output = Command::new(env!("CARGO_BIN_EXE_pocketbook"))
        .args(args)
        .current_dir(workspace)
        .env("POCKETBOOK_HOME", workspace.join("home"))
        .env("NO_COLOR", "1")
        .env_remove("COLORFGBG")
        .env_remove("POCKETBOOK_LOG")
        .output();
    assert!(output.is_ok());
    match output {
        Ok(result) => CliOutput {
            code: result.status.code(),
            stdout: String::from_utf8_lossy(&result.stdout).to_string(),
        },
        Err(_) => CliOutput {
            code: None,
            stdout: String::new(),
        },
    }
}

fn run_json(workspace: &Path, args: &[&str]) -> (Option<i32>, Value) {
    let mut with_flag = args.to_vec();
    with_flag.push("--json");
    let output = run_cli(workspace, &with_flag);
    let parsed = serde_json::from_str::<Value>(&output.stdout).unwrap_or(Value::Null);
    (output.code, parsed)
}

#[test]
fn no_arguments_prints_top_level_help() {
    let Some(dir) = temp_workspace() else {
        return;
    };
    let output = run_cli(dir.path(), &[]);
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.starts_with("Pocketbook - track income and expenses"));
    assert!(output.stdout.contains("pocketbook add"));
}

#[test]
fn add_then_summary_reports_negative_balance() {
    let Some(dir) = temp_workspace() else {
        return;
    };
    let (code, added) = run_json(
        dir.path(),
        &["add", "Coffee", "4.50", "--category", "food", "--date", "2024-01-05"],
    );
    assert_eq!(code, Some(0));
    assert_eq!(added["ok"], true);
    assert_eq!(added["data"]["transaction"]["type"], "expense");
    assert_eq!(added["data"]["notification"]["message"], "\"Coffee\" added successfully!");

    let (code, summary) = run_json(dir.path(), &["summary"]);
    assert_eq!(code, Some(0));
    assert_eq!(summary["data"]["balance"], -4.5);

    let text = run_cli(dir.path(), &["summary"]);
    assert_eq!(text.code, Some(0));
    assert!(text.stdout.contains("-$4.50"));
}

#[test]
fn edit_and_delete_by_id() {
    let Some(dir) = temp_workspace() else {
        return;
    };
    let (_, added) = run_json(dir.path(), &["add", "Lunch", "12", "--date", "2024-02-01"]);
    let id = added["data"]["transaction"]["id"].as_str().unwrap_or("").to_string();
    assert!(id.starts_with("txn_"));

    let (code, edited) = run_json(dir.path(), &["edit", &id, "--amount", "15.25"]);
    assert_eq!(code, Some(0));
    assert_eq!(edited["data"]["transaction"]["amount"], 15.25);
    assert_eq!(edited["data"]["transaction"]["description"], "Lunch");

    let (code, deleted) = run_json(dir.path(), &["delete", &id]);
    assert_eq!(code, Some(0));
    assert_eq!(deleted["data"]["transaction_count"], 0);

    let (code, missing) = run_json(dir.path(), &["delete", &id]);
    assert_eq!(code, Some(1));
    assert_eq!(missing["error"]["code"], "transaction_not_found");
}

#[test]
fn invalid_input_is_a_user_error() {
    let Some(dir) = temp_workspace() else {
        return;
    };
    let (code, payload) = run_json(dir.path(), &["add", "Coffee", "-3"]);
    assert_eq!(code, Some(1));
    assert_eq!(payload["error"]["code"], "invalid_argument");

    let (code, payload) = run_json(dir.path(), &["add", "Huge", "79228162514264337593543950335"]);
    assert_eq!(code, Some(1));
    assert_eq!(payload["error"]["code"], "invalid_argument");

    let text = run_cli(dir.path(), &["list", "--month", "2024-13"]);
    assert_eq!(text.code, Some(1));
    assert!(text.stdout.contains("What to do next:"));
    assert!(text.stdout.contains("pocketbook list --help"));
}

#[test]
fn clear_requires_yes() {
    let Some(dir) = temp_workspace() else {
        return;
    };
    let _ = run_json(dir.path(), &["add", "Rent", "1200", "--category", "bills"]);

    let (code, refused) = run_json(dir.path(), &["clear"]);
    assert_eq!(code, Some(1));
    assert_eq!(refused["error"]["code"], "confirmation_required");

    let (code, cleared) = run_json(dir.path(), &["clear", "--yes"]);
    assert_eq!(code, Some(0));
    assert_eq!(cleared["data"]["removed_count"], 1);
}

#[test]
fn export_writes_dated_file_and_stdout_variant() {
    let Some(dir) = temp_workspace() else {
        return;
    };
    let _ = run_json(dir.path(), &["add", "Coffee", "4.50", "--category", "food", "--date", "2024-01-05"]);
    let _ = run_json(dir.path(), &["add", "Salary", "2500", "--type", "income", "--date", "2024-01-01"]);

    let (code, exported) = run_json(dir.path(), &["export"]);
    assert_eq!(code, Some(0));
    let path = exported["data"]["path"].as_str().unwrap_or("").to_string();
    assert!(path.starts_with("expenses-") && path.ends_with(".csv"));
    let written = fs::read_to_string(dir.path().join(&path)).unwrap_or_default();
    assert_eq!(written.lines().count(), 3);

    let piped = run_cli(dir.path(), &["export", "--output", "-"]);
    assert_eq!(piped.code, Some(0));
    let lines = piped.stdout.lines().collect::<Vec<&str>>();
    assert_eq!(lines[0], "Date,Description,Category,Type,Amount");
    assert_eq!(lines[1], "2024-01-05,Coffee,food,expense,4.5");
    assert_eq!(lines[2], "2024-01-01,Salary,other,income,2500");
}

#[test]
fn theme_defaults_to_system_then_persists() {
    let Some(dir) = temp_workspace() else {
        return;
    };
    let (code, shown) = run_json(dir.path(), &["theme"]);
    assert_eq!(code, Some(0));
    assert_eq!(shown["data"]["source"], "system");
    assert_eq!(shown["data"]["theme"], "light");

    let (code, toggled) = run_json(dir.path(), &["theme", "toggle"]);
    assert_eq!(code, Some(0));
    assert_eq!(toggled["data"]["theme"], "dark");

    let stored = fs::read_to_string(dir.path().join("home").join("theme")).unwrap_or_default();
    assert_eq!(stored, "dark");
}

#[test]
fn corrupt_storage_still_lists_empty() {
    let Some(dir) = temp_workspace() else {
        return;
    };
    let home = dir.path().join("home");
    assert!(fs::create_dir_all(&home).is_ok());
    assert!(fs::write(home.join("expense-tracker-transactions"), "not json").is_ok());

    let output = run_cli(dir.path(), &["list"]);
    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Transactions (0 of 0)"));
    assert!(output.stdout.contains("No transactions yet."));
}
