//! # hwp-text-rs
//!
//! Plain-text extraction and rewriting for HWP word-processor documents.
//!
//! Two container formats are supported:
//!
//! - **HWP** (`.hwp`) — a compound-binary container whose body text lives in
//!   tagged, optionally deflate-compressed record streams. Text extraction
//!   only.
//! - **HWPX** (`.hwpx`) — a zip package of XML parts. Text extraction and
//!   literal find/replace rewriting.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! // Extract text from a legacy document
//! let text = hwp_text_rs::hwp::extract_text("report.hwp")?;
//!
//! // Extract text from an HWPX package
//! let text = hwp_text_rs::hwpx::extract_text("report.hwpx")?;
//!
//! // Replace a word everywhere in an HWPX package
//! hwp_text_rs::hwpx::replace_text("in.hwpx", "out.hwpx", "draft", "final")?;
//! ```

pub mod error;
pub mod hwp;
pub mod hwpx;
pub mod xml;

pub use error::{Error, Result};
pub use hwp::Container;
pub use hwpx::Package;
