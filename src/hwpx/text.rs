//! Text extraction and find/replace over package XML entries

use crate::error::{Error, Result};
use crate::hwpx::package::{Package, PREVIEW_TEXT_ENTRY};
use crate::xml::{self, XmlElement, XmlNode};

/// Collect the text of every Contents XML entry, elements visited in
/// document order, each element contributing its trimmed leading text.
pub(crate) fn package_text(package: &Package) -> Result<String> {
    let mut pieces: Vec<String> = Vec::new();
    for entry in package.entries().filter(|e| e.is_contents_xml()) {
        let root = xml::parse_document(entry.data())?;
        collect_text(&root, &mut pieces);
    }
    Ok(pieces.join("\n"))
}

fn collect_text(element: &XmlElement, pieces: &mut Vec<String>) {
    if let Some(text) = element.leading_text() {
        pieces.push(text.trim().to_string());
    }
    for child in &element.children {
        if let XmlNode::Element(child) = child {
            collect_text(child, pieces);
        }
    }
}

/// Apply a literal find/replace to every text node of every Contents XML
/// entry, and to the UTF-16 preview text when present. Rewritten XML is
/// re-serialized as UTF-8 with an XML declaration; every other entry keeps
/// its bytes.
pub(crate) fn replace_package_text(
    package: &mut Package,
    find: &str,
    replace: &str,
) -> Result<()> {
    let mut rewritten = 0usize;
    for entry in package.entries_mut() {
        if entry.is_contents_xml() {
            let mut root = xml::parse_document(entry.data())?;
            root.replace_text(find, replace);
            entry.set_data(xml::serialize_document(&root)?);
            rewritten += 1;
        } else if entry.name() == PREVIEW_TEXT_ENTRY {
            let preview = decode_utf16(entry.data()).ok_or_else(|| {
                Error::InvalidDocument(format!("{PREVIEW_TEXT_ENTRY} is not valid UTF-16"))
            })?;
            entry.set_data(encode_utf16le(&preview.replace(find, replace)));
            rewritten += 1;
        }
    }
    log::debug!("rewrote {rewritten} package entries");
    Ok(())
}

/// Decode UTF-16 with an optional byte-order mark; preview text without a
/// mark is little-endian.
fn decode_utf16(bytes: &[u8]) -> Option<String> {
    let (bytes, big_endian) = match bytes {
        [0xFF, 0xFE, rest @ ..] => (rest, false),
        [0xFE, 0xFF, rest @ ..] => (rest, true),
        _ => (bytes, false),
    };
    if bytes.len() % 2 != 0 {
        return None;
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| {
            if big_endian {
                u16::from_be_bytes([pair[0], pair[1]])
            } else {
                u16::from_le_bytes([pair[0], pair[1]])
            }
        })
        .collect();
    String::from_utf16(&units).ok()
}

fn encode_utf16le(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + text.len() * 2);
    out.extend_from_slice(&[0xFF, 0xFE]);
    for unit in text.encode_utf16() {
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf16_little_endian_bom() {
        let bytes = encode_utf16le("미리보기");
        assert_eq!(decode_utf16(&bytes).unwrap(), "미리보기");
    }

    #[test]
    fn test_decode_utf16_big_endian_bom() {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in "Hi".encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        assert_eq!(decode_utf16(&bytes).unwrap(), "Hi");
    }

    #[test]
    fn test_decode_utf16_without_bom_defaults_little_endian() {
        let bytes: Vec<u8> = "plain".encode_utf16().flat_map(u16::to_le_bytes).collect();
        assert_eq!(decode_utf16(&bytes).unwrap(), "plain");
    }

    #[test]
    fn test_decode_utf16_odd_length_fails() {
        assert!(decode_utf16(&[0xFF, 0xFE, 0x41]).is_none());
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let text = "changed 본문";
        assert_eq!(decode_utf16(&encode_utf16le(text)).unwrap(), text);
    }
}
