//! BodyText section enumeration and reading
//!
//! Sections live in streams named `BodyText/Section<N>`. The container may
//! list them in any directory order; logical document order is ascending
//! numeric id order, so ids are parsed and sorted before any section stream
//! is opened.

use std::io::{Read, Seek};

use flate2::read::DeflateDecoder;

use crate::error::{Error, Result};
use crate::hwp::container::Container;
use crate::hwp::record;

/// Storage holding the document body streams.
const BODY_TEXT_STORAGE: &str = "BodyText";

/// Section stream name prefix within the storage.
const SECTION_PREFIX: &str = "Section";

/// List the document's section ids in ascending order.
pub fn section_ids<R: Read + Seek>(container: &Container<R>) -> Result<Vec<u32>> {
    ids_from_paths(container.stream_paths())
}

fn ids_from_paths<I: IntoIterator<Item = String>>(paths: I) -> Result<Vec<u32>> {
    let mut ids = Vec::new();
    for path in paths {
        let Some((storage, name)) = path.split_once('/') else {
            continue;
        };
        if storage != BODY_TEXT_STORAGE {
            continue;
        }
        let id = name
            .strip_prefix(SECTION_PREFIX)
            .and_then(|suffix| suffix.parse::<u32>().ok())
            .ok_or_else(|| Error::MalformedSectionName(path.clone()))?;
        ids.push(id);
    }
    ids.sort_unstable();
    ids.dedup();
    Ok(ids)
}

/// Read one section stream and decode its text, inflating first when the
/// document-level compression flag is set.
pub fn read_section<R: Read + Seek>(
    container: &mut Container<R>,
    id: u32,
    compressed: bool,
) -> Result<String> {
    let path = format!("{BODY_TEXT_STORAGE}/{SECTION_PREFIX}{id}");
    let data = container.read_stream(&path)?;
    let data = if compressed { inflate_raw(&data)? } else { data };
    record::decode_text(&data)
}

/// Inflate a headerless deflate stream. Output grows as needed; no size
/// ratio is assumed.
fn inflate_raw(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = DeflateDecoder::new(data);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}
