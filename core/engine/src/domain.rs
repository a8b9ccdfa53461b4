//! FILENAME: core/engine/src/domain.rs
//! PURPOSE: Typed value classifiers that govern which values a column or band may hold.
//! CONTEXT: A domain is one of a closed set of variants (numeric range, thematic
//! item list, identifier item list, free text). Everything that varies per
//! variant (validation, coercion, value type, compatibility) is dispatched
//! with a `match` on the variant.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::value::{Value, IUNDEF};

/// The storage type a domain implies for its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    Int32,
    Int64,
    Double,
    ThematicItem,
    NamedItem,
    String,
}

impl ValueType {
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueType::Int32 | ValueType::Int64 | ValueType::Double)
    }
}

// ============================================================================
// NUMERIC RANGE
// ============================================================================

/// Closed numeric interval with a resolution.
/// A resolution of 0 means real values; a whole resolution >= 1 means integers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
    pub resolution: f64,
}

impl NumericRange {
    pub fn new(min: f64, max: f64, resolution: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        NumericRange {
            min,
            max,
            resolution: resolution.max(0.0),
        }
    }

    /// Unbounded real range.
    pub fn real() -> Self {
        NumericRange::new(f64::MIN, f64::MAX, 0.0)
    }

    /// 32 bit signed integers, excluding the integer undefined marker.
    pub fn integer() -> Self {
        NumericRange::new(IUNDEF as f64 + 1.0, i32::MAX as f64, 1.0)
    }

    /// Non-negative 32 bit integers.
    pub fn count() -> Self {
        NumericRange::new(0.0, i32::MAX as f64, 1.0)
    }

    pub fn is_integer(&self) -> bool {
        self.resolution >= 1.0 && self.resolution.fract() == 0.0
    }

    pub fn contains(&self, n: f64) -> bool {
        if n.is_nan() || n < self.min || n > self.max {
            return false;
        }
        !self.is_integer() || n.fract() == 0.0
    }

    pub fn value_type(&self) -> ValueType {
        if !self.is_integer() {
            ValueType::Double
        } else if self.min >= i32::MIN as f64 && self.max <= i32::MAX as f64 {
            ValueType::Int32
        } else {
            ValueType::Int64
        }
    }
}

impl Default for NumericRange {
    fn default() -> Self {
        NumericRange::real()
    }
}

// ============================================================================
// ITEM DOMAIN
// ============================================================================

/// An ordered list of unique, named items.
/// The position of an item is its raw index (used for raster pixel storage).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDomain {
    pub name: String,
    items: Vec<String>,
}

impl ItemDomain {
    /// Creates an item domain, rejecting duplicate item names.
    pub fn new<I, S>(name: impl Into<String>, items: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut domain = ItemDomain {
            name: name.into(),
            items: Vec::new(),
        };
        for item in items {
            let item = item.into();
            if !domain.add_item(item.clone()) {
                return Err(EngineError::DuplicateItem {
                    item,
                    domain: domain.name,
                });
            }
        }
        Ok(domain)
    }

    /// Builds a domain from arbitrary names, keeping the first occurrence of each.
    pub fn from_distinct<I, S>(name: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut domain = ItemDomain {
            name: name.into(),
            items: Vec::new(),
        };
        for item in names {
            domain.add_item(item.into());
        }
        domain
    }

    /// Appends an item. Returns false if an item with that name already exists.
    pub fn add_item(&mut self, item: String) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn contains(&self, item: &str) -> bool {
        self.index_of(item).is_some()
    }

    pub fn index_of(&self, item: &str) -> Option<usize> {
        self.items.iter().position(|i| i == item)
    }

    pub fn item(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(|s| s.as_str())
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============================================================================
// DOMAIN
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Domain {
    Numeric(NumericRange),
    Thematic(ItemDomain),
    Identifier(ItemDomain),
    Text,
}

impl Domain {
    /// The default numeric domain ("value"): unbounded reals.
    pub fn numeric() -> Self {
        Domain::Numeric(NumericRange::real())
    }

    pub fn integer() -> Self {
        Domain::Numeric(NumericRange::integer())
    }

    pub fn count() -> Self {
        Domain::Numeric(NumericRange::count())
    }

    pub fn text() -> Self {
        Domain::Text
    }

    pub fn thematic<I, S>(name: impl Into<String>, items: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Domain::Thematic(ItemDomain::new(name, items)?))
    }

    pub fn identifier<I, S>(name: impl Into<String>, items: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Domain::Identifier(ItemDomain::new(name, items)?))
    }

    /// Resolves one of the built-in domains by name (case-insensitive).
    pub fn from_system_name(name: &str) -> EngineResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "value" | "double" | "float" | "real" | "numeric" => Ok(Domain::numeric()),
            "integer" | "int" => Ok(Domain::integer()),
            "count" => Ok(Domain::count()),
            "text" | "string" => Ok(Domain::text()),
            _ => Err(EngineError::UnknownDomain(name.to_string())),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Domain::Numeric(range) if range.is_integer() => "integer",
            Domain::Numeric(_) => "value",
            Domain::Thematic(items) | Domain::Identifier(items) => &items.name,
            Domain::Text => "text",
        }
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Domain::Numeric(range) => range.value_type(),
            Domain::Thematic(_) => ValueType::ThematicItem,
            Domain::Identifier(_) => ValueType::NamedItem,
            Domain::Text => ValueType::String,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Domain::Numeric(_))
    }

    pub fn numeric_range(&self) -> Option<&NumericRange> {
        match self {
            Domain::Numeric(range) => Some(range),
            _ => None,
        }
    }

    pub fn item_domain(&self) -> Option<&ItemDomain> {
        match self {
            Domain::Thematic(items) | Domain::Identifier(items) => Some(items),
            _ => None,
        }
    }

    /// The value an unset slot of this domain holds.
    pub fn undefined(&self) -> Value {
        Value::Undefined
    }

    /// Strict membership test: the value must already be in canonical form.
    pub fn is_valid(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Undefined) => true,
            (Domain::Numeric(range), Value::Number(n)) => range.contains(*n),
            (Domain::Thematic(items), Value::Item(name))
            | (Domain::Identifier(items), Value::Item(name)) => items.contains(name),
            (Domain::Text, Value::Text(_)) => true,
            _ => false,
        }
    }

    /// Coerces a value into this domain's canonical form.
    /// Returns None when the value has no representation in the domain.
    pub fn to_canonical(&self, value: &Value) -> Option<Value> {
        let canonical = match (self, value) {
            (_, Value::Undefined) => Value::Undefined,
            (Domain::Numeric(_), Value::Number(n)) => Value::number(*n),
            (Domain::Numeric(_), Value::Text(s)) | (Domain::Numeric(_), Value::Item(s)) => {
                Value::number(s.trim().parse::<f64>().ok()?)
            }
            (Domain::Thematic(_), Value::Text(s))
            | (Domain::Thematic(_), Value::Item(s))
            | (Domain::Identifier(_), Value::Text(s))
            | (Domain::Identifier(_), Value::Item(s)) => Value::Item(s.clone()),
            (Domain::Text, v) => Value::Text(v.display_value()),
            _ => return None,
        };
        if self.is_valid(&canonical) {
            Some(canonical)
        } else {
            None
        }
    }

    /// Whether values of `other` can be mixed with values of this domain
    /// (e.g. stacked as bands of one raster).
    pub fn is_compatible_with(&self, other: &Domain) -> bool {
        match (self, other) {
            (Domain::Numeric(_), Domain::Numeric(_)) => true,
            (Domain::Thematic(a), Domain::Thematic(b)) => a.items() == b.items(),
            (Domain::Identifier(a), Domain::Identifier(b)) => a.items() == b.items(),
            (Domain::Text, Domain::Text) => true,
            _ => false,
        }
    }
}

impl Default for Domain {
    fn default() -> Self {
        Domain::numeric()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_value_types() {
        assert_eq!(Domain::numeric().value_type(), ValueType::Double);
        assert_eq!(Domain::integer().value_type(), ValueType::Int32);
        let wide = Domain::Numeric(NumericRange::new(0.0, 1e12, 1.0));
        assert_eq!(wide.value_type(), ValueType::Int64);
    }

    #[test]
    fn test_integer_range_rejects_fractions() {
        let domain = Domain::integer();
        assert!(domain.is_valid(&Value::Number(200.0)));
        assert!(!domain.is_valid(&Value::Number(200.5)));
        assert!(domain.is_valid(&Value::Undefined));
    }

    #[test]
    fn test_item_domain_rejects_duplicates() {
        let result = ItemDomain::new("landuse", ["stone", "water", "stone"]);
        assert!(matches!(result, Err(EngineError::DuplicateItem { .. })));
    }

    #[test]
    fn test_thematic_canonical_form() {
        let domain = Domain::thematic("landuse", ["stone", "houses", "water"]).unwrap();
        assert_eq!(
            domain.to_canonical(&Value::text("houses")),
            Some(Value::item("houses"))
        );
        assert_eq!(domain.to_canonical(&Value::text("grass")), None);
        assert_eq!(domain.to_canonical(&Value::Number(1.0)), None);
    }

    #[test]
    fn test_numeric_canonical_parses_text() {
        let domain = Domain::numeric();
        assert_eq!(domain.to_canonical(&Value::text(" 12.5")), Some(Value::Number(12.5)));
        assert_eq!(domain.to_canonical(&Value::text("aap")), None);
    }

    #[test]
    fn test_compatibility() {
        let landuse = Domain::thematic("landuse", ["stone", "water"]).unwrap();
        let other = Domain::thematic("other", ["stone", "water"]).unwrap();
        let soil = Domain::thematic("soil", ["clay"]).unwrap();

        assert!(Domain::numeric().is_compatible_with(&Domain::integer()));
        assert!(!Domain::numeric().is_compatible_with(&landuse));
        assert!(landuse.is_compatible_with(&other));
        assert!(!landuse.is_compatible_with(&soil));
    }

    #[test]
    fn test_system_names() {
        assert_eq!(Domain::from_system_name("Value").unwrap(), Domain::numeric());
        assert_eq!(Domain::from_system_name("integer").unwrap().name(), "integer");
        assert!(Domain::from_system_name("predom").is_err());
    }
}
