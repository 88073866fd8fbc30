//! Error types for hwp-text-rs

use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("not an HWP document: required streams are missing")]
    InvalidFormat,

    #[error("FileHeader stream truncated: expected {expected} bytes, got {actual}")]
    TruncatedHeader { expected: usize, actual: usize },

    #[error("malformed BodyText stream name: {0}")]
    MalformedSectionName(String),

    #[error("record truncated at offset {offset}")]
    TruncatedRecord { offset: usize },

    #[error("text record at offset {offset} is not valid UTF-16")]
    TextDecode { offset: usize },

    #[error("invalid document: {0}")]
    InvalidDocument(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
