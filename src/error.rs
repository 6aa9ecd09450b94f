use crate::codec::CodecError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error kind for build failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildErrorKind {
    /// A value could not be converted into a JSON tree.
    Serialize,
    /// The merged tree does not fit the target type.
    Deserialize,
}

/// Produced by a [`Builder`](crate::builder::Builder) when a value cannot be
/// moved between its typed form and its JSON tree.
///
/// Values must be representable as a JSON tree: map keys have to serialize
/// as strings, numbers or booleans. Non-finite floats and 128-bit integers
/// are carried as strings and do not fail. `path` is the dot-path (with
/// `[i]` for array elements) of the value that failed, when known.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildError {
    pub kind: BuildErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl BuildError {
    pub(crate) fn serialization(err: CodecError) -> Self {
        BuildError {
            kind: BuildErrorKind::Serialize,
            message: format!("failed to convert value to JSON tree: {}", err.message),
            path: err.path,
        }
    }

    pub(crate) fn deserialization(err: CodecError) -> Self {
        BuildError {
            kind: BuildErrorKind::Deserialize,
            message: format!("merged value does not fit target type: {}", err.message),
            path: err.path,
        }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} at {}", self.message, path),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for BuildError {}

/// Error kind for parse failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    Syntax,
    TypeMismatch,
}

/// Produced by the [`parse`](crate::parse) entry points when text cannot be
/// loaded as a base value or an override.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(line), Some(col)) = (self.line, self.column) {
            write!(f, "{}:{}: {}", line, col, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_path_when_known() {
        let err = BuildError {
            kind: BuildErrorKind::Deserialize,
            message: "bad".to_string(),
            path: Some("settings".to_string()),
        };
        assert_eq!(err.to_string(), "bad at settings");
    }

    #[test]
    fn parse_error_display_prefixes_location() {
        let err = ParseError {
            kind: ParseErrorKind::Syntax,
            message: "unexpected end".to_string(),
            line: Some(3),
            column: Some(7),
        };
        assert_eq!(err.to_string(), "3:7: unexpected end");
    }
}
