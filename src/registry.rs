//! In-process primitive registry
//!
//! Built-in primitives plus every primitive installed in a [`PrimitiveStore`]. An
//! installed primitive replaces a built-in one with the same name.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Result, primitive_not_installed};
use crate::installer::{PrimitiveStore, SkippedFile, scan_store};
use crate::primitive::{PrimitiveDefinition, normalize_name};
use crate::primitive::builtin::builtin_primitives;

/// Where a registered primitive came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveOrigin {
    Builtin,
    /// Installed file name
    Installed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisteredPrimitive {
    pub name: String,
    #[serde(flatten)]
    pub definition: PrimitiveDefinition,
    pub origin: PrimitiveOrigin,
}

impl RegisteredPrimitive {
    pub fn is_installed(&self) -> bool {
        matches!(self.origin, PrimitiveOrigin::Installed(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct PrimitiveRegistry {
    primitives: BTreeMap<String, RegisteredPrimitive>,
    skipped: Vec<SkippedFile>,
}

impl PrimitiveRegistry {
    /// Registry holding only the built-in primitives
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        registry.register_builtins();
        registry
    }

    /// Built-in primitives plus everything installed in `store`
    pub fn load<S: PrimitiveStore + ?Sized>(store: &S) -> Result<Self> {
        let mut registry = Self::builtin();
        registry.load_installed(store)?;
        Ok(registry)
    }

    /// Rebuild from scratch so newly installed or removed files are picked up
    pub fn reload<S: PrimitiveStore + ?Sized>(&mut self, store: &S) -> Result<()> {
        *self = Self::load(store)?;
        tracing::debug!(count = self.len(), "reloaded primitive registry");
        Ok(())
    }

    fn register_builtins(&mut self) {
        for definition in builtin_primitives() {
            let name = definition.name();
            self.primitives.insert(
                name.clone(),
                RegisteredPrimitive {
                    name,
                    definition,
                    origin: PrimitiveOrigin::Builtin,
                },
            );
        }
    }

    fn load_installed<S: PrimitiveStore + ?Sized>(&mut self, store: &S) -> Result<()> {
        let scan = scan_store(store)?;

        for installed in scan.primitives {
            if let Some(previous) = self.primitives.get(&installed.name) {
                tracing::debug!(
                    name = %installed.name,
                    replaced = ?previous.origin,
                    file = %installed.file_name,
                    "installed primitive overrides existing definition"
                );
            }
            self.primitives.insert(
                installed.name.clone(),
                RegisteredPrimitive {
                    name: installed.name,
                    definition: installed.definition,
                    origin: PrimitiveOrigin::Installed(installed.file_name),
                },
            );
        }
        self.skipped = scan.skipped;

        Ok(())
    }

    /// Remove a primitive from this registry; installed files are not touched
    pub fn unregister(&mut self, name: &str) -> Result<RegisteredPrimitive> {
        self.primitives
            .remove(&normalize_name(name))
            .ok_or_else(|| primitive_not_installed(name))
    }

    /// Look up by primitive name or class name
    pub fn get(&self, name: &str) -> Option<&RegisteredPrimitive> {
        self.primitives.get(&normalize_name(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.primitives.contains_key(&normalize_name(name))
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.primitives.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredPrimitive> {
        self.primitives.values()
    }

    /// Installed files that failed to load
    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
