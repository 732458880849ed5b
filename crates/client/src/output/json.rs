//! JSON output formatting.

/// Format a value as compact JSON, one document per line.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bugwatch_core::cloudwatch::AlertSource;

    #[test]
    fn test_format_json_is_single_line() {
        let source = AlertSource {
            arn_id: 1,
            name: "Ops topic".to_string(),
            value: "arn:aws:sns:us-east-1:123456789012:ops".to_string(),
        };

        let output = format_json(&source);

        assert!(!output.contains('\n'));
        assert!(output.contains(r#""arn_id":1"#));
    }
}
