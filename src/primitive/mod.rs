//! Primitive definitions
//!
//! A primitive is a reusable feature-computation unit. User primitives are declared in
//! YAML descriptor files (see [`descriptor`]); the library ships a static table of
//! built-in primitives (see [`builtin`]).
//!
//! ## Module Organization
//!
//! - `descriptor.rs`: descriptor schema, parsing and `load_primitive_from_file`
//! - `builtin.rs`: built-in primitive table

pub mod builtin;
pub mod descriptor;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use descriptor::{PRIMITIVE_EXTENSION, load_primitive_from_file, parse_primitives};

/// The primitive capability a definition implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    /// Reduces many values of a related column to one value
    Aggregation,
    /// Maps values of one or more columns row by row
    Transform,
}

impl PrimitiveKind {
    /// Parse a `kind` field value; `None` for non-primitive kinds
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "aggregation" => Some(Self::Aggregation),
            "transform" => Some(Self::Transform),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aggregation => "aggregation",
            Self::Transform => "transform",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical type of a primitive input or output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Numeric,
    Categorical,
    Boolean,
    Datetime,
    Text,
    Id,
    Any,
}

impl ValueType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
            Self::Boolean => "boolean",
            Self::Datetime => "datetime",
            Self::Text => "text",
            Self::Id => "id",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated primitive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimitiveDefinition {
    /// Declared class name (e.g. `CustomMax`)
    pub class_name: String,
    pub kind: PrimitiveKind,
    pub input_types: Vec<ValueType>,
    pub return_type: ValueType,
    pub description: Option<String>,
    /// Whether the primitive may be applied to its own output
    pub stack_on_self: bool,
}

impl PrimitiveDefinition {
    /// Registry name derived from the class name
    pub fn name(&self) -> String {
        normalize_name(&self.class_name)
    }
}

/// Normalize a class name into a registry name: lower-cased, separators dropped.
///
/// `CustomMax`, `custom_max` and `Custom-Max` all normalize to `custommax`.
pub fn normalize_name(class_name: &str) -> String {
    class_name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
