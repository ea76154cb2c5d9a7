use std::io;

use serde_json::Value;

use super::format::value_str;
use super::notice_text::render_notification;
use super::palette::Palette;

pub fn render_theme(data: &Value, palette: &Palette) -> io::Result<String> {
    let theme = value_str(data, "theme");
    let source = match value_str(data, "source") {
        "stored" => "saved preference",
        _ => "system preference",
    };

    let mut lines = Vec::new();
    let notice = render_notification(data, palette);
    if !notice.is_empty() {
        lines.push(notice);
    }
    lines.push(format!("Theme: {theme} ({source})"));
    if let Some(detail) = data.get("storage_error").and_then(Value::as_str) {
        lines.push(format!("  Cause:  {detail}"));
    }
    Ok(lines.join("\n"))
}
