//! HWP (compound-binary) text extraction
//!
//! Pipeline: open the container, gate on the mandatory streams, read the
//! document-level compression flag, then decode each BodyText section in
//! ascending section order and join the results.

mod container;
mod header;
mod record;
mod section;

pub use container::Container;
pub use record::RecordHeader;

use std::io::{Read, Seek};
use std::path::Path;

use crate::error::Result;

/// Extract the plain text of an HWP document.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut container = Container::open(path)?;
    extract_from_container(&mut container)
}

/// Extract the plain text of an HWP document held in memory.
pub fn extract_text_from_bytes(bytes: &[u8]) -> Result<String> {
    let mut container = Container::from_bytes(bytes)?;
    extract_from_container(&mut container)
}

fn extract_from_container<R: Read + Seek>(container: &mut Container<R>) -> Result<String> {
    container.validate()?;
    let compressed = header::is_compressed(container)?;
    let ids = section::section_ids(container)?;
    log::debug!(
        "decoding {} body sections (compressed: {})",
        ids.len(),
        compressed
    );

    let mut sections = Vec::with_capacity(ids.len());
    for id in ids {
        sections.push(section::read_section(container, id, compressed)?);
    }
    Ok(assemble(&sections))
}

/// Join per-section texts with a newline and trim the combined result only;
/// whitespace inside sections is preserved verbatim.
fn assemble(sections: &[String]) -> String {
    sections.join("\n").trim().to_string()
}
