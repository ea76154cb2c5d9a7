use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::{ClientError, ClientResult};

pub fn format_iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_timestamp(moment: &DateTime<Utc>) -> String {
    moment.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `YYYY-MM` key used for monthly grouping and month filters.
pub fn month_key(date: &NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

pub fn parse_transaction_date(value: &str) -> Option<NaiveDate> {
    if !looks_like_iso_date(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub fn parse_iso_date_strict(value: &str, field_name: &str, command: &str) -> ClientResult<NaiveDate> {
    parse_transaction_date(value).ok_or_else(|| {
        ClientError::invalid_argument_for_command(
            &format!("`{field_name}` must use YYYY-MM-DD format with a real calendar date."),
            Some(command),
        )
    })
}

pub fn is_year_month(value: &str) -> bool {
    if !looks_like_year_month(value) {
        return false;
    }
    let month = value[5..].parse::<u32>().unwrap_or(0);
    (1..=12).contains(&month)
}

pub fn parse_year_month_strict(value: &str, command: &str) -> ClientResult<String> {
    if is_year_month(value) {
        return Ok(value.to_string());
    }
    Err(ClientError::invalid_argument_for_command(
        "`month` must use YYYY-MM format with a real calendar month.",
        Some(command),
    ))
}

fn looks_like_iso_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}

fn looks_like_year_month(value: &str) -> bool {
    if value.len() != 7 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' {
        return false;
    }
    [0usize, 1, 2, 3, 5, 6]
        .iter()
        .all(|index| bytes[*index].is_ascii_digit())
}
