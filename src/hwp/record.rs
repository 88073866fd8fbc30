//! Record-stream decoding
//!
//! A decompressed section stream is a flat sequence of tagged records: a
//! 4-byte little-endian header word followed by `size` payload bytes. Only
//! paragraph-text records are interpreted; every other tag is skipped by its
//! declared size so the cursor stays aligned for the records that follow.

use crate::error::{Error, Result};

/// Tag id of paragraph-text records.
pub(crate) const TAG_PARA_TEXT: u16 = 67;

/// Decoded form of the 4-byte record header word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordHeader {
    /// Record tag id (bits 0-9)
    pub tag: u16,
    /// Nesting level (bits 10-19); carried but not interpreted
    pub level: u16,
    /// Payload byte length (bits 20-31)
    pub size: usize,
}

impl RecordHeader {
    /// Split a header word into its packed fields
    pub fn from_word(word: u32) -> Self {
        Self {
            tag: (word & 0x3FF) as u16,
            level: ((word >> 10) & 0x3FF) as u16,
            size: ((word >> 20) & 0xFFF) as usize,
        }
    }
}

/// Extract the text of every paragraph-text record in a section buffer.
///
/// Each text record contributes its decoded payload plus one trailing
/// newline, in record order. The cursor advances exactly `4 + size` bytes
/// per record whether or not the tag is recognized; a record that ends
/// exactly at the buffer end is valid.
pub fn decode_text(data: &[u8]) -> Result<String> {
    let mut text = String::new();
    let mut cursor = 0;

    while cursor < data.len() {
        if data.len() - cursor < 4 {
            return Err(Error::TruncatedRecord { offset: cursor });
        }
        let word = u32::from_le_bytes([
            data[cursor],
            data[cursor + 1],
            data[cursor + 2],
            data[cursor + 3],
        ]);
        let header = RecordHeader::from_word(word);

        let payload_start = cursor + 4;
        if data.len() - payload_start < header.size {
            return Err(Error::TruncatedRecord { offset: cursor });
        }

        if header.tag == TAG_PARA_TEXT {
            let payload = &data[payload_start..payload_start + header.size];
            let decoded =
                decode_utf16le(payload).ok_or(Error::TextDecode { offset: cursor })?;
            text.push_str(&decoded);
            text.push('\n');
        }

        cursor = payload_start + header.size;
    }

    Ok(text)
}

/// Decode a UTF-16LE payload. An odd byte count or an unpaired surrogate
/// means the stream is corrupt.
fn decode_utf16le(bytes: &[u8]) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).ok()
}
