use std::io;

use serde_json::Value;

use super::format::{
    Align, Column, decimal_from_value, format_money, format_money_value, format_percent_value,
    key_value_rows, render_table, terminal_width, value_count, value_str,
};
use super::palette::Palette;

pub fn render_summary(data: &Value, palette: &Palette) -> io::Result<String> {
    let income_count = value_count(data, "income_count");
    let expense_count = value_count(data, "expense_count");

    let mut lines = vec!["Summary".to_string(), String::new()];
    lines.extend(key_value_rows(
        &[
            (
                "Total income:",
                format!(
                    "{}  ({income_count} transactions)",
                    palette.income(&format_money_value(&data["income"]))
                ),
            ),
            (
                "Total expenses:",
                format!(
                    "{}  ({expense_count} transactions)",
                    palette.expense(&format_money_value(&data["expense"]))
                ),
            ),
            ("Balance:", signed(&data["balance"], palette)),
            ("Savings rate:", format_percent_value(&data["savings_rate"])),
        ],
        2,
    ));
    if value_count(data, "transaction_count") == 0 {
        lines.push(String::new());
        lines.push("  No transactions yet. Add one with `pocketbook add`.".to_string());
    }
    Ok(lines.join("\n"))
}

pub fn render_monthly(data: &Value, palette: &Palette) -> io::Result<String> {
    let months = data
        .get("months")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let mut lines = vec!["Monthly totals".to_string(), String::new()];
    if months.is_empty() {
        lines.push("  No transactions yet.".to_string());
        return Ok(lines.join("\n"));
    }

    let columns = [
        Column {
            name: "Month",
            align: Align::Left,
        },
        Column {
            name: "Income",
            align: Align::Right,
        },
        Column {
            name: "Expenses",
            align: Align::Right,
        },
        Column {
            name: "Balance",
            align: Align::Right,
        },
        Column {
            name: "Count",
            align: Align::Right,
        },
    ];
    let rows = months
        .iter()
        .map(|month| {
            vec![
                value_str(month, "month").to_string(),
                format_money_value(&month["income"]),
                format_money_value(&month["expense"]),
                format_money_value(&month["balance"]),
                value_count(month, "transaction_count").to_string(),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    lines.extend(render_table(&columns, &rows, terminal_width()));

    if let Some(latest) = months.last() {
        lines.push(String::new());
        lines.push(format!(
            "  Latest month balance: {}",
            signed(&latest["balance"], palette)
        ));
    }
    Ok(lines.join("\n"))
}

fn signed(value: &Value, palette: &Palette) -> String {
    let amount = decimal_from_value(value);
    palette.signed(&format_money(amount), amount.is_sign_negative() && !amount.is_zero())
}
