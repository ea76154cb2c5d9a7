use pocketbook_client::ClientError;

pub fn render_error(error: &ClientError) -> String {
    let mut lines = vec![
        "That didn't work.".to_string(),
        String::new(),
        format!("  Error:    {}", error.code),
        format!("  Details:  {}", error.message),
        String::new(),
        "What to do next:".to_string(),
    ];

    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use pocketbook_client::ClientError;

    use super::render_error;

    #[test]
    fn renders_standard_error_layout() {
        let rendered = render_error(&ClientError::confirmation_required(3));
        assert!(rendered.starts_with("That didn't work."));
        assert!(rendered.contains("  Error:    confirmation_required"));
        assert!(rendered.contains("all 3 transactions"));
        assert!(rendered.contains("What to do next:"));
        assert!(rendered.contains("  2. Re-run `pocketbook clear --yes` to confirm."));
    }

    #[test]
    fn falls_back_to_retry_step() {
        let rendered = render_error(&ClientError::internal_serialization("boom"));
        assert!(rendered.contains("  1. Retry the command."));
    }
}
