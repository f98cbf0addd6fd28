//! Primitive definition errors

use super::FeatureKitError;

/// Creates a "no primitive defined" validation error
pub fn none_defined(path: impl Into<String>) -> FeatureKitError {
    FeatureKitError::NoPrimitiveDefined { path: path.into() }
}

/// Creates a "more than one primitive defined" validation error
pub fn multiple_defined(path: impl Into<String>, classes: &[&str]) -> FeatureKitError {
    FeatureKitError::MultiplePrimitivesDefined {
        path: path.into(),
        classes: classes.join(", "),
    }
}

/// Creates a schema error for a primitive document
pub fn invalid(path: impl Into<String>, reason: impl Into<String>) -> FeatureKitError {
    FeatureKitError::InvalidPrimitive {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a duplicate primitive name error
pub fn duplicate(
    name: impl Into<String>,
    first: impl Into<String>,
    second: impl Into<String>,
) -> FeatureKitError {
    FeatureKitError::DuplicatePrimitive {
        name: name.into(),
        first: first.into(),
        second: second.into(),
    }
}

/// Creates a primitive not installed error
pub fn not_installed(name: impl Into<String>) -> FeatureKitError {
    FeatureKitError::PrimitiveNotInstalled { name: name.into() }
}
