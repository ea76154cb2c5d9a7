use std::io;

use serde_json::Value;

use super::format::{
    Align, Column, decimal_from_value, format_money, format_money_value, key_value_rows,
    render_table, terminal_width, value_count, value_str,
};
use super::notice_text::render_notification;
use super::palette::Palette;

const COLUMNS: [Column<'static>; 6] = [
    Column {
        name: "ID",
        align: Align::Left,
    },
    Column {
        name: "Date",
        align: Align::Left,
    },
    Column {
        name: "Description",
        align: Align::Left,
    },
    Column {
        name: "Category",
        align: Align::Left,
    },
    Column {
        name: "Type",
        align: Align::Left,
    },
    Column {
        name: "Amount",
        align: Align::Right,
    },
];

/// Output for `add`, `edit`, and `delete`.
pub fn render_change(data: &Value, palette: &Palette) -> io::Result<String> {
    let mut lines = vec![render_notification(data, palette)];
    let applied = data.get("applied").and_then(Value::as_bool).unwrap_or(false);

    if let Some(transaction) = data.get("transaction").filter(|value| value.is_object()) {
        lines.push(String::new());
        lines.extend(key_value_rows(
            &[
                ("ID:", value_str(transaction, "id").to_string()),
                ("Date:", value_str(transaction, "date").to_string()),
                ("Description:", value_str(transaction, "description").to_string()),
                ("Category:", value_str(transaction, "category").to_string()),
                ("Type:", value_str(transaction, "type").to_string()),
                ("Amount:", signed_amount(transaction, palette)),
            ],
            2,
        ));
    }

    if let Some(detail) = data.get("storage_error").and_then(Value::as_str) {
        lines.push(String::new());
        lines.push(format!("  Cause:  {detail}"));
    }
    if applied {
        lines.push(String::new());
        lines.push(format!(
            "  Transactions stored: {}",
            value_count(data, "transaction_count")
        ));
    }

    Ok(lines.join("\n"))
}

pub fn render_list(data: &Value, palette: &Palette) -> io::Result<String> {
    let rows = data
        .get("transactions")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    let total = value_count(data, "total_count");
    let filters_active = data
        .get("filters_active")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let mut lines = vec![format!("Transactions ({} of {total})", rows.len())];
    lines.push(String::new());

    if rows.is_empty() {
        if total == 0 {
            lines.push("  No transactions yet.".to_string());
            lines.push("  Add one with `pocketbook add <description> <amount>`.".to_string());
        } else {
            lines.push("  No transactions match these filters.".to_string());
            lines.push("  Try adjusting your filters or search term.".to_string());
        }
        return Ok(lines.join("\n"));
    }

    let amounts = rows
        .iter()
        .map(|row| (plain_signed_amount(row), is_income(row)))
        .collect::<Vec<(String, bool)>>();
    let table_rows = rows
        .iter()
        .zip(amounts.iter())
        .map(|(row, (amount, _))| {
            vec![
                value_str(row, "id").to_string(),
                value_str(row, "date").to_string(),
                value_str(row, "description").to_string(),
                value_str(row, "category").to_string(),
                value_str(row, "type").to_string(),
                amount.clone(),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    let table = render_table(&COLUMNS, &table_rows, terminal_width());
    lines.extend(colorize_amount_cells(table, &amounts, palette));

    let totals = data.get("totals").cloned().unwrap_or(Value::Null);
    lines.push(String::new());
    lines.extend(key_value_rows(
        &[
            ("Income:", palette.income(&format_money_value(&totals["income"]))),
            ("Expenses:", palette.expense(&format_money_value(&totals["expense"]))),
            ("Net:", signed_money(&totals["balance"], palette)),
        ],
        2,
    ));
    if filters_active {
        lines.push(String::new());
        lines.push("  Filters are active. Run `pocketbook list` to see everything.".to_string());
    }

    Ok(lines.join("\n"))
}

pub fn render_categories(data: &Value) -> io::Result<String> {
    let join = |key: &str| {
        data.get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<&str>>()
                    .join(", ")
            })
            .unwrap_or_default()
    };

    let in_use = join("in_use");
    let mut lines = vec!["Categories".to_string(), String::new()];
    lines.extend(key_value_rows(
        &[
            (
                "In use:",
                if in_use.is_empty() {
                    "(none yet)".to_string()
                } else {
                    in_use
                },
            ),
            ("Income:", join("income_defaults")),
            ("Expense:", join("expense_defaults")),
        ],
        2,
    ));
    Ok(lines.join("\n"))
}

fn is_income(row: &Value) -> bool {
    value_str(row, "type") == "income"
}

fn plain_signed_amount(row: &Value) -> String {
    let amount = format_money(decimal_from_value(&row["amount"]));
    if is_income(row) {
        format!("+{amount}")
    } else {
        format!("-{amount}")
    }
}

fn signed_amount(row: &Value, palette: &Palette) -> String {
    palette.signed(&plain_signed_amount(row), !is_income(row))
}

fn signed_money(value: &Value, palette: &Palette) -> String {
    let amount = decimal_from_value(value);
    palette.signed(&format_money(amount), amount.is_sign_negative() && !amount.is_zero())
}

/// Colors the amount at the end of each row's first line. The table is
/// laid out on plain text so escape codes do not affect column widths.
fn colorize_amount_cells(table: Vec<String>, amounts: &[(String, bool)], palette: &Palette) -> Vec<String> {
    let mut next = 0usize;
    table
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            if index == 0 {
                return line;
            }
            let Some((amount, income)) = amounts.get(next) else {
                return line;
            };
            match line.strip_suffix(amount.as_str()) {
                Some(prefix) => {
                    next += 1;
                    format!("{prefix}{}", palette.signed(amount, !income))
                }
                None => line,
            }
        })
        .collect()
}
