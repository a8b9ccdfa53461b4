//! FILENAME: core/engine/src/value.rs
//! PURPOSE: Defines the value stored in a table cell and the undefined sentinels.
//! CONTEXT: A `Value` is what lives in a (column, record) slot. Which variants
//! are legal for a slot is decided by the column's `Domain`. Numeric and string
//! "undefined" markers follow the sentinel convention used across the engine:
//! callers asking for a number from an undefined slot receive `RUNDEF`.

use serde::{Deserialize, Serialize};

/// Numeric undefined marker returned for slots that hold no number.
pub const RUNDEF: f64 = -1e308;

/// Integer undefined marker (32 bit).
pub const IUNDEF: i32 = -2_147_483_647;

/// String undefined marker. Also the default "no value" placeholder token.
pub const SUNDEF: &str = "?";

/// The content of a single cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Undefined,
    Number(f64),
    Text(String),
    /// Reference to a named item of a thematic or identifier domain, by name.
    Item(String),
}

impl Value {
    pub fn number(n: f64) -> Self {
        if is_undefined_number(n) {
            Value::Undefined
        } else {
            Value::Number(n)
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn item(name: impl Into<String>) -> Self {
        Value::Item(name.into())
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns the number held by this value, or `RUNDEF` when there is none.
    pub fn as_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            _ => RUNDEF,
        }
    }

    /// Returns the textual payload for text and item values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) | Value::Item(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the display value as a String.
    /// Integral numbers are printed without a fraction; undefined prints as `?`.
    pub fn display_value(&self) -> String {
        match self {
            Value::Undefined => SUNDEF.to_string(),
            Value::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{:.0}", n)
                } else {
                    format!("{}", n)
                }
            }
            Value::Text(s) | Value::Item(s) => s.clone(),
        }
    }

    /// Hashable key used for grouping and key lookups.
    pub fn key(&self) -> ValueKey {
        ValueKey::from(self)
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Undefined
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        if n == IUNDEF {
            Value::Undefined
        } else {
            Value::Number(n as f64)
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_value())
    }
}

/// True for NaN and anything at or below the `RUNDEF` marker.
pub fn is_undefined_number(n: f64) -> bool {
    n.is_nan() || n <= RUNDEF
}

// ============================================================================
// VALUE KEYS
// ============================================================================

/// A normalized, hashable representation of a value.
/// Text and item values with the same name compare equal, so a text key column
/// can be matched against an item key column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKey {
    Undefined,
    Number(OrderedFloat),
    Text(String),
}

impl From<&Value> for ValueKey {
    fn from(value: &Value) -> Self {
        match value {
            Value::Undefined => ValueKey::Undefined,
            Value::Number(n) => ValueKey::Number(OrderedFloat(*n)),
            Value::Text(s) | Value::Item(s) => ValueKey::Text(s.clone()),
        }
    }
}

/// Wrapper around f64 that implements Eq, Ord and Hash for use as map keys.
/// NaN values are treated as equal to each other and sort last.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderedFloat(pub f64);

impl PartialEq for OrderedFloat {
    fn eq(&self, other: &Self) -> bool {
        if self.0.is_nan() && other.0.is_nan() {
            true
        } else {
            self.0 == other.0
        }
    }
}

impl Eq for OrderedFloat {}

impl PartialOrd for OrderedFloat {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedFloat {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self == other {
            return std::cmp::Ordering::Equal;
        }
        self.0
            .partial_cmp(&other.0)
            .unwrap_or_else(|| self.0.total_cmp(&other.0))
    }
}

impl std::hash::Hash for OrderedFloat {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        if self.0.is_nan() {
            u64::MAX.hash(state);
        } else if self.0 == 0.0 {
            // -0.0 and 0.0 compare equal, so they must hash equal
            0u64.hash(state);
        } else {
            self.0.to_bits().hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_number_maps_to_rundef() {
        assert_eq!(Value::Undefined.as_number(), RUNDEF);
        assert_eq!(Value::text("aap").as_number(), RUNDEF);
        assert_eq!(Value::Number(12.5).as_number(), 12.5);
    }

    #[test]
    fn test_number_constructor_folds_sentinels() {
        assert!(Value::number(RUNDEF).is_undefined());
        assert!(Value::number(f64::NAN).is_undefined());
        assert!(Value::from(IUNDEF).is_undefined());
        assert_eq!(Value::from(22), Value::Number(22.0));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(Value::Number(200.0).display_value(), "200");
        assert_eq!(Value::Number(2.5).display_value(), "2.5");
        assert_eq!(Value::Undefined.display_value(), "?");
        assert_eq!(Value::item("noot").display_value(), "noot");
    }

    #[test]
    fn test_text_and_item_share_key() {
        assert_eq!(Value::text("water").key(), Value::item("water").key());
        assert_ne!(Value::text("1").key(), Value::Number(1.0).key());
        assert_eq!(Value::Number(0.0).key(), Value::Number(-0.0).key());
    }
}
