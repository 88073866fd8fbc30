//! HWPX (zip-of-XML) text extraction and rewriting

mod package;
mod text;

pub use package::{Entry, Package};

use std::path::Path;

use crate::error::Result;

/// Extract the plain text of an HWPX package.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let package = Package::open(path)?;
    text::package_text(&package)
}

/// Extract the plain text of an HWPX package held in memory.
pub fn extract_text_from_bytes(bytes: &[u8]) -> Result<String> {
    let package = Package::from_bytes(bytes)?;
    text::package_text(&package)
}

/// Rewrite a package with every literal occurrence of `find` replaced by
/// `replace`, writing the result to `output`. The input package is left
/// untouched.
pub fn replace_text<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    find: &str,
    replace: &str,
) -> Result<()> {
    let mut package = Package::open(input)?;
    text::replace_package_text(&mut package, find, replace)?;
    package.save(output)
}
