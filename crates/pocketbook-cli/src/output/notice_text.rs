use std::io;

use serde_json::Value;

use super::format::value_str;
use super::palette::Palette;

pub fn render_notification(data: &Value, palette: &Palette) -> String {
    let Some(notification) = data.get("notification").filter(|value| value.is_object()) else {
        return String::new();
    };
    let level = value_str(notification, "level");
    palette.level(level, value_str(notification, "message"))
}

/// Output for commands whose result is just a notification: `clear` and
/// file exports.
pub fn render_notice(data: &Value, palette: &Palette) -> io::Result<String> {
    let mut lines = vec![render_notification(data, palette)];
    if let Some(path) = data.get("path").and_then(Value::as_str)
        && data.get("applied").and_then(Value::as_bool) == Some(true)
    {
        lines.push(format!("  Saved to {path}"));
    }
    if let Some(detail) = data.get("storage_error").and_then(Value::as_str) {
        lines.push(format!("  Cause:  {detail}"));
    }
    Ok(lines.join("\n"))
}

/// `export --output -` prints the CSV itself so it can be piped.
pub fn render_export(data: &Value, palette: &Palette) -> io::Result<String> {
    match data.get("csv").and_then(Value::as_str) {
        Some(csv) => Ok(csv.trim_end().to_string()),
        None => render_notice(data, palette),
    }
}
