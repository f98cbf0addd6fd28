//! Primitive descriptor files
//!
//! A descriptor file is a YAML stream. Every document is a top-level definition; the
//! documents whose `kind` is `aggregation` or `transform` are primitives and must match
//! [`PrimitiveDescriptor`]. Anything else (helpers, metadata, empty documents) is
//! ignored. A valid primitive file holds exactly one primitive.

use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;

use super::{PrimitiveDefinition, PrimitiveKind, ValueType};
use crate::error::{
    Result, file_read_failed, invalid_primitive, multiple_primitives_defined, no_primitive_defined,
};

/// Extension of primitive descriptor files
pub const PRIMITIVE_EXTENSION: &str = "yaml";

/// Schema of a primitive document
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PrimitiveDescriptor {
    kind: PrimitiveKind,
    class: String,
    input_types: Vec<ValueType>,
    return_type: ValueType,
    #[serde(default)]
    description: Option<String>,
    #[serde(default = "default_stack_on_self")]
    stack_on_self: bool,
}

fn default_stack_on_self() -> bool {
    true
}

fn is_valid_class_name(class: &str) -> bool {
    let mut chars = class.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl PrimitiveDescriptor {
    fn into_definition(self, origin: &str) -> Result<PrimitiveDefinition> {
        if !is_valid_class_name(&self.class) {
            return Err(invalid_primitive(
                origin,
                format!("'{}' is not a valid class name", self.class),
            ));
        }
        if self.input_types.is_empty() {
            return Err(invalid_primitive(
                origin,
                format!("primitive '{}' declares no input types", self.class),
            ));
        }

        Ok(PrimitiveDefinition {
            class_name: self.class,
            kind: self.kind,
            input_types: self.input_types,
            return_type: self.return_type,
            description: self.description.filter(|d| !d.trim().is_empty()),
            stack_on_self: self.stack_on_self,
        })
    }
}

fn primitive_kind_of(document: &Value) -> Option<PrimitiveKind> {
    document
        .as_mapping()?
        .get("kind")?
        .as_str()
        .and_then(PrimitiveKind::from_kind)
}

/// Parse every primitive declared in a descriptor stream.
///
/// `origin` names the stream in error messages (usually the file path).
pub fn parse_primitives(content: &str, origin: &str) -> Result<Vec<PrimitiveDefinition>> {
    let mut primitives = Vec::new();

    for document in serde_yaml::Deserializer::from_str(content) {
        let value = Value::deserialize(document)
            .map_err(|e| invalid_primitive(origin, format!("malformed YAML: {e}")))?;

        if primitive_kind_of(&value).is_none() {
            tracing::trace!(origin, "skipping non-primitive definition");
            continue;
        }

        let descriptor: PrimitiveDescriptor = serde_yaml::from_value(value)
            .map_err(|e| invalid_primitive(origin, e.to_string()))?;
        primitives.push(descriptor.into_definition(origin)?);
    }

    Ok(primitives)
}

/// Select the single primitive of a parsed stream.
pub(crate) fn single_primitive(
    mut primitives: Vec<PrimitiveDefinition>,
    origin: &str,
) -> Result<(String, PrimitiveDefinition)> {
    match primitives.len() {
        0 => Err(no_primitive_defined(origin)),
        1 => {
            let primitive = primitives.remove(0);
            Ok((primitive.name(), primitive))
        }
        _ => {
            let classes: Vec<&str> = primitives.iter().map(|p| p.class_name.as_str()).collect();
            Err(multiple_primitives_defined(origin, &classes))
        }
    }
}

/// Load the one primitive defined in a descriptor file.
///
/// Returns the normalized primitive name and its definition. Fails when the file
/// defines no primitive or more than one.
pub fn load_primitive_from_file(path: &Path) -> Result<(String, PrimitiveDefinition)> {
    let content = std::fs::read_to_string(path).map_err(|e| file_read_failed(path, &e))?;
    let origin = path.display().to_string();
    let loaded = single_primitive(parse_primitives(&content, &origin)?, &origin)?;
    tracing::debug!(path = %origin, name = %loaded.0, "loaded primitive");
    Ok(loaded)
}
