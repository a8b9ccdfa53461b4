//! FILENAME: core/operations/src/definition.rs
//! Operation Definition - The serializable description of an operation.
//!
//! This module contains the types needed to DESCRIBE an operation:
//! its name, its syntax, the parameters it takes and what it produces.
//! The dispatcher validates every call against this metadata before the
//! operation itself runs, so individual operations can assume they receive
//! the right number and kind of arguments.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ============================================================================
// ARGUMENT KINDS
// ============================================================================

/// The kind of entity an argument carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgumentKind {
    Table,
    Raster,
    Domain,
    Text,
    Number,
}

impl ArgumentKind {
    pub fn name(&self) -> &'static str {
        match self {
            ArgumentKind::Table => "table",
            ArgumentKind::Raster => "rastercoverage",
            ArgumentKind::Domain => "domain",
            ArgumentKind::Text => "string",
            ArgumentKind::Number => "number",
        }
    }
}

impl std::fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// PARAMETERS
// ============================================================================

/// One declared parameter of an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDef {
    pub name: String,

    /// Accepted argument kinds. Most parameters accept exactly one.
    pub kinds: SmallVec<[ArgumentKind; 2]>,

    /// Optional parameters may be left out, but only from the end of the list.
    #[serde(default)]
    pub optional: bool,

    /// Whether an empty table, an invalid raster or a blank string is acceptable.
    #[serde(default)]
    pub allow_empty: bool,

    #[serde(default)]
    pub description: String,
}

impl ParameterDef {
    pub fn new(name: &str, kind: ArgumentKind, description: &str) -> Self {
        let mut kinds = SmallVec::new();
        kinds.push(kind);
        ParameterDef {
            name: name.to_string(),
            kinds,
            optional: false,
            allow_empty: false,
            description: description.to_string(),
        }
    }

    /// Adds another accepted kind.
    pub fn or(mut self, kind: ArgumentKind) -> Self {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    pub fn accepts(&self, kind: ArgumentKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Human readable list of accepted kinds, e.g. "domain or string".
    pub fn expected(&self) -> String {
        self.kinds
            .iter()
            .map(|k| k.name())
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

// ============================================================================
// OPERATION METADATA
// ============================================================================

/// Describes a registered operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationMetadata {
    /// Lower case name the operation is registered under.
    pub name: String,

    /// Call syntax, e.g. "addcolumn(table,columnname,domain)".
    pub syntax: String,

    pub description: String,

    pub parameters: Vec<ParameterDef>,

    pub output: ArgumentKind,

    #[serde(default)]
    pub keywords: Vec<String>,
}

impl OperationMetadata {
    pub fn new(name: &str, syntax: &str, description: &str, output: ArgumentKind) -> Self {
        OperationMetadata {
            name: name.to_lowercase(),
            syntax: syntax.to_string(),
            description: description.to_string(),
            parameters: Vec::new(),
            output,
            keywords: Vec::new(),
        }
    }

    pub fn parameter(mut self, parameter: ParameterDef) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    /// Number of arguments that must be present.
    pub fn required_count(&self) -> usize {
        self.parameters.iter().filter(|p| !p.optional).count()
    }

    /// Largest number of arguments accepted.
    pub fn max_count(&self) -> usize {
        self.parameters.len()
    }

    /// "3" or "4-6", used in error messages.
    pub fn arity(&self) -> String {
        let (min, max) = (self.required_count(), self.max_count());
        if min == max {
            min.to_string()
        } else {
            format!("{}-{}", min, max)
        }
    }
}

// ============================================================================
// AGGREGATION
// ============================================================================

/// Reductions supported by the group-by operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggregationType {
    Sum,
    Average,
    Maximum,
    Minimum,
}

impl AggregationType {
    /// Parses an aggregation keyword (case-insensitive).
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword.trim().to_lowercase().as_str() {
            "sum" => Some(AggregationType::Sum),
            "average" | "avg" | "mean" => Some(AggregationType::Average),
            "maximum" | "max" => Some(AggregationType::Maximum),
            "minimum" | "min" => Some(AggregationType::Minimum),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AggregationType::Sum => "sum",
            AggregationType::Average => "average",
            AggregationType::Maximum => "maximum",
            AggregationType::Minimum => "minimum",
        }
    }
}

impl Default for AggregationType {
    fn default() -> Self {
        AggregationType::Sum
    }
}
