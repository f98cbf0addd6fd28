//! Source, download and archive errors

use super::FeatureKitError;

/// Creates an invalid source error
pub fn invalid(input: impl Into<String>, reason: impl Into<String>) -> FeatureKitError {
    FeatureKitError::InvalidSource {
        input: input.into(),
        reason: reason.into(),
    }
}

/// Creates a source not found error
pub fn not_found(path: impl Into<String>) -> FeatureKitError {
    FeatureKitError::SourceNotFound { path: path.into() }
}

/// Creates an unsupported archive format error
pub fn unsupported_archive(path: impl Into<String>) -> FeatureKitError {
    FeatureKitError::UnsupportedArchive { path: path.into() }
}

/// Creates an archive extraction error
pub fn extraction_failed(path: impl Into<String>, reason: impl Into<String>) -> FeatureKitError {
    FeatureKitError::ExtractionFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a download error
pub fn fetch_failed(url: impl Into<String>, reason: impl Into<String>) -> FeatureKitError {
    FeatureKitError::FetchFailed {
        url: url.into(),
        reason: reason.into(),
    }
}
