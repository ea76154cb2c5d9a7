use std::io;

use serde_json::Value;

use super::format::{
    Align, Column, decimal_from_value, format_money, format_money_value, format_percent_value,
    key_value_rows, render_table, terminal_width, value_count, value_str,
};
use super::palette::Palette;

pub fn render_insights(data: &Value, palette: &Palette) -> io::Result<String> {
    let month = value_str(data, "month");
    let balance = decimal_from_value(&data["balance"]);

    let mut lines = vec![format!("Insights for {month}"), String::new()];
    lines.extend(key_value_rows(
        &[
            ("Income:", palette.income(&format_money_value(&data["income"]))),
            ("Expenses:", palette.expense(&format_money_value(&data["expense"]))),
            (
                "Balance:",
                palette.signed(&format_money(balance), balance.is_sign_negative() && !balance.is_zero()),
            ),
            ("Savings rate:", format_percent_value(&data["savings_rate"])),
            ("Expense ratio:", format_percent_value(&data["expense_ratio"])),
            ("Transactions:", value_count(data, "transaction_count").to_string()),
        ],
        2,
    ));

    lines.push(String::new());
    lines.push("Expenses by category".to_string());
    lines.extend(breakdown_lines(&data["expense_breakdown"], "No expenses this month."));

    lines.push(String::new());
    lines.push("Income by category".to_string());
    lines.extend(breakdown_lines(&data["income_breakdown"], "No income this month."));

    let overall = &data["overall"];
    lines.push(String::new());
    lines.push("All time".to_string());
    lines.extend(key_value_rows(
        &[
            ("Total income:", format_money_value(&overall["income"])),
            ("Total expenses:", format_money_value(&overall["expense"])),
            ("Savings rate:", format_percent_value(&overall["savings_rate"])),
        ],
        2,
    ));

    Ok(lines.join("\n"))
}

fn breakdown_lines(breakdown: &Value, empty_message: &str) -> Vec<String> {
    let entries = breakdown.as_array().cloned().unwrap_or_default();
    if entries.is_empty() {
        return vec![format!("  {empty_message}")];
    }

    let columns = [
        Column {
            name: "Category",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
        Column {
            name: "Share",
            align: Align::Right,
        },
    ];
    let rows = entries
        .iter()
        .map(|entry| {
            vec![
                value_str(entry, "category").to_string(),
                format_money_value(&entry["amount"]),
                format_percent_value(&entry["share"]),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    render_table(&columns, &rows, terminal_width())
}
