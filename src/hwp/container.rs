//! Compound-container access for HWP documents
//!
//! An HWP file is a compound-binary (CFB) container of named streams. This
//! wrapper exposes the two things the read pipeline needs: the list of
//! stream paths and whole-stream reads. The container is never written.

use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use crate::error::{Error, Result};

/// Stream holding the fixed-size document header.
pub(crate) const FILE_HEADER_STREAM: &str = "FileHeader";

/// Summary-information stream. The leading 0x05 control byte marks OLE
/// property-set streams.
pub(crate) const SUMMARY_STREAM: &str = "\u{5}HwpSummaryInformation";

/// Read-only view over the compound-binary container of an HWP file.
pub struct Container<R: Read + Seek> {
    inner: cfb::CompoundFile<R>,
}

impl Container<File> {
    /// Open a container from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

impl<'a> Container<Cursor<&'a [u8]>> {
    /// Open a container over an in-memory buffer
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self> {
        Self::from_reader(Cursor::new(bytes))
    }
}

impl<R: Read + Seek> Container<R> {
    /// Open a container from a reader
    pub fn from_reader(reader: R) -> Result<Self> {
        let inner = cfb::CompoundFile::open(reader)?;
        Ok(Self { inner })
    }

    /// List every stream path in the container, `/`-joined and without the
    /// root prefix (e.g. `BodyText/Section0`). Storages are not listed.
    pub fn stream_paths(&self) -> Vec<String> {
        self.inner
            .walk()
            .filter(|entry| entry.is_stream())
            .map(|entry| {
                entry
                    .path()
                    .to_string_lossy()
                    .trim_start_matches('/')
                    .to_string()
            })
            .collect()
    }

    /// Read a stream in full.
    pub fn read_stream(&mut self, path: &str) -> Result<Vec<u8>> {
        let mut stream = self.inner.open_stream(path)?;
        let mut data = Vec::new();
        stream.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Format gate: both mandatory streams must be present. Runs before
    /// anything else touches the container's streams.
    pub fn validate(&self) -> Result<()> {
        let paths = self.stream_paths();
        let has_header = paths.iter().any(|p| p == FILE_HEADER_STREAM);
        let has_summary = paths.iter().any(|p| p == SUMMARY_STREAM);
        if !has_header || !has_summary {
            return Err(Error::InvalidFormat);
        }
        Ok(())
    }
}
