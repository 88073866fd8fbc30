//! FileHeader inspection
//!
//! The `FileHeader` stream carries the format signature, version, and a
//! document property bit-field. Only the compression bit is consumed: when
//! set, every BodyText section stream is raw-deflate compressed.

use std::io::{Read, Seek};

use crate::error::{Error, Result};
use crate::hwp::container::{Container, FILE_HEADER_STREAM};

/// Byte offset of the document property bit-field inside `FileHeader`.
const PROPERTY_BYTE: usize = 36;

/// Bytes required to reach the property bit-field.
const MIN_HEADER_LEN: usize = PROPERTY_BYTE + 1;

/// Read the document-level compression flag (bit 0 of the property byte).
///
/// A `FileHeader` shorter than the property bit-field is a hard format
/// error, not a transient condition.
pub fn is_compressed<R: Read + Seek>(container: &mut Container<R>) -> Result<bool> {
    let data = container.read_stream(FILE_HEADER_STREAM)?;
    if data.len() < MIN_HEADER_LEN {
        return Err(Error::TruncatedHeader {
            expected: MIN_HEADER_LEN,
            actual: data.len(),
        });
    }
    Ok(data[PROPERTY_BYTE] & 0x01 != 0)
}
