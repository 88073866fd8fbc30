//! HWPX package access
//!
//! An HWPX document is a zip archive. Entry order matters for faithful
//! rewriting, so entries are kept in archive order rather than keyed by
//! name. Entries not individually rewritten are copied back byte-for-byte.

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek, Write};
use std::path::Path;
use zip::read::ZipArchive;
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

use crate::error::Result;

/// Directory prefix of the body-content XML entries.
pub(crate) const CONTENTS_PREFIX: &str = "Contents/";

/// Entry holding the UTF-16 plain-text preview.
pub(crate) const PREVIEW_TEXT_ENTRY: &str = "Preview/PrvText.txt";

/// One archive entry: name and raw bytes.
#[derive(Clone, Debug)]
pub struct Entry {
    name: String,
    data: Vec<u8>,
}

impl Entry {
    /// Get the entry name (archive path)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the raw data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Replace the entry data
    pub fn set_data(&mut self, data: Vec<u8>) {
        self.data = data;
    }

    /// Whether this entry is body-content XML
    pub fn is_contents_xml(&self) -> bool {
        self.name.starts_with(CONTENTS_PREFIX) && self.name.ends_with(".xml")
    }
}

/// An HWPX package held fully in memory.
#[derive(Clone, Debug)]
pub struct Package {
    /// All entries, in archive order
    entries: Vec<Entry>,
}

impl Package {
    /// Open a package from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
    }

    /// Open a package from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let cursor = Cursor::new(bytes);
        Self::from_reader(cursor)
    }

    /// Open a package from a reader
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;
        let mut entries = Vec::with_capacity(archive.len());

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            if file.is_dir() {
                continue;
            }
            let mut data = Vec::new();
            file.read_to_end(&mut data)?;
            entries.push(Entry {
                name: file.name().to_string(),
                data,
            });
        }

        log::debug!("loaded {} package entries", entries.len());
        Ok(Self { entries })
    }

    /// Save the package to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(file)
    }

    /// Save the package to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let cursor = Cursor::new(&mut buf);
        self.write_to(cursor)?;
        Ok(buf)
    }

    /// Write the package to a writer, rebuilding the archive in entry order
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        let options: FileOptions<()> =
            FileOptions::default().compression_method(CompressionMethod::Deflated);

        for entry in &self.entries {
            zip.start_file(entry.name.as_str(), options)?;
            zip.write_all(&entry.data)?;
        }

        zip.finish()?;
        Ok(())
    }

    /// Get an entry by name
    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Iterate all entries in archive order
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Iterate all entries mutably, in archive order
    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut Entry> {
        self.entries.iter_mut()
    }
}
