//! Loading base values and overrides from YAML or JSON text.

use crate::error::{ParseError, ParseErrorKind};
use crate::partial::DeepPartial;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse YAML (or JSON, which is accepted as YAML) into a value tree.
pub fn parse_value(input: &str) -> Result<Value, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError {
            kind: ParseErrorKind::Syntax,
            message: "empty input".to_string(),
            line: None,
            column: None,
        });
    }

    serde_saphyr::from_str(input).map_err(|e| {
        let msg = e.to_string();
        let (line, column) = extract_location(&msg);
        ParseError {
            kind: classify_saphyr_error(&msg),
            message: msg,
            line,
            column,
        }
    })
}

/// Parse an override for `T`. The root must be a mapping.
pub fn parse_partial<T>(input: &str) -> Result<DeepPartial<T>, ParseError> {
    let value = parse_value(input)?;
    if !value.is_object() {
        return Err(ParseError {
            kind: ParseErrorKind::TypeMismatch,
            message: "override root must be a mapping".to_string(),
            line: None,
            column: None,
        });
    }
    Ok(DeepPartial::from_value(value))
}

/// Parse a complete base value of type `T`.
pub fn parse_base<T: DeserializeOwned>(input: &str) -> Result<T, ParseError> {
    let value = parse_value(input)?;
    serde_json::from_value(value).map_err(|e| ParseError {
        kind: ParseErrorKind::TypeMismatch,
        message: e.to_string(),
        line: None,
        column: None,
    })
}

fn classify_saphyr_error(msg: &str) -> ParseErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("invalid type") || lower.contains("invalid value") {
        ParseErrorKind::TypeMismatch
    } else {
        ParseErrorKind::Syntax
    }
}

/// Best-effort "line N column M" extraction from a saphyr error message.
fn extract_location(msg: &str) -> (Option<usize>, Option<usize>) {
    let number_after = |label: &str| {
        let start = msg.find(label)? + label.len();
        let digits: String = msg[start..]
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    };
    (number_after("line"), number_after("column"))
}
