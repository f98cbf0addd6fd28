//! Remote archive URLs
//!
//! S3 objects are fetched anonymously through the path-style HTTPS endpoint, so
//! `s3://bucket/key.tar.gz` and `https://s3.amazonaws.com/bucket/key.tar.gz` name the
//! same download.

use crate::error::{Result, invalid_source, unsupported_archive};
use crate::fetch::ArchiveFormat;

/// Public HTTPS endpoint used for `s3://` URLs
pub const S3_HTTPS_ENDPOINT: &str = "https://s3.amazonaws.com";

pub(crate) const SUPPORTED_SCHEMES: &[&str] = &["s3", "https"];

pub(crate) fn is_supported_scheme(scheme: &str) -> bool {
    SUPPORTED_SCHEMES.contains(&scheme)
}

/// A remote archive of primitive files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteArchive {
    /// URL as given by the caller
    pub original: String,
    /// HTTPS URL to download
    pub url: String,
    /// Last path segment, used as the staged file name
    pub file_name: String,
    pub format: ArchiveFormat,
}

impl RemoteArchive {
    /// Parse an `s3://` or `https://` archive URL
    pub fn parse(input: &str) -> Result<Self> {
        let url = if let Some(rest) = input.strip_prefix("s3://") {
            let (bucket, key) = rest
                .split_once('/')
                .filter(|(bucket, key)| !bucket.is_empty() && !key.is_empty())
                .ok_or_else(|| invalid_source(input, "expected s3://<bucket>/<key>"))?;
            format!("{S3_HTTPS_ENDPOINT}/{bucket}/{key}")
        } else if let Some(rest) = input.strip_prefix("https://") {
            let host = rest.split('/').next().unwrap_or_default();
            if host.is_empty() {
                return Err(invalid_source(input, "URL has no host"));
            }
            input.to_string()
        } else {
            return Err(invalid_source(input, "expected an s3:// or https:// URL"));
        };

        let path = url.split(['?', '#']).next().unwrap_or_default();
        let file_name = path
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| invalid_source(input, "URL does not name an archive"))?
            .to_string();
        let format = ArchiveFormat::detect(&file_name).ok_or_else(|| unsupported_archive(input))?;

        Ok(Self {
            original: input.to_string(),
            url,
            file_name,
            format,
        })
    }
}
