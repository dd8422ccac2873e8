//! Cell value normalization.
//!
//! Every raw cell passes through here exactly once. The outcome is a
//! [`Value`], which is either text, a finite number, or an explicit
//! [`Value::Null`]. Absence is never encoded as `0`, an empty string or NaN.

use serde::Serialize;

/// Character used as thousands separator in the spreadsheet exports.
pub const THOUSANDS_SEPARATOR: char = ',';

/// How a column's raw text should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Number,
}

/// A normalized cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Number(f64),
    Null,
}

impl Value {
    /// Normalizes a raw cell according to the kind of column it came from.
    pub fn normalize(kind: FieldKind, raw: Option<&str>) -> Value {
        let normalized = match kind {
            FieldKind::Text => normalize_text(raw).map(Value::Text),
            FieldKind::Number => normalize_number(raw).map(Value::Number),
        };
        normalized.unwrap_or(Value::Null)
    }
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
    /// Text content, if any. A number is rendered back to text.
    pub fn into_text(self) -> Option<String> {
        match self {
            Value::Text(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Null => None,
        }
    }
    /// Numeric content, if any. Text goes through [`normalize_number`].
    pub fn into_number(self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n),
            Value::Text(s) => normalize_number(Some(&s)),
            Value::Null => None,
        }
    }
}

/// Returns `None` for an absent or empty cell, otherwise the text untouched.
///
/// Casing and padding are kept as they appear in the source; comparisons
/// that need to ignore them do so on their own (see [`crate::diagnostic`]).
pub fn normalize_text(raw: Option<&str>) -> Option<String> {
    match raw {
        Some(s) if !s.is_empty() => Some(s.to_string()),
        _ => None,
    }
}

/// Parses a possibly locale-formatted number such as `"12,345.50"`.
///
/// All thousands separators are removed before parsing. Absent, empty,
/// unparseable and non-finite input (`"nan"`, `"inf"`) all yield `None`.
pub fn normalize_number(raw: Option<&str>) -> Option<f64> {
    let raw = raw?;
    let stripped: String = raw.chars().filter(|c| *c != THOUSANDS_SEPARATOR).collect();
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
