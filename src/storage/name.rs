//! Font names
//!
//! A font name doubles as the file name inside the store, so it has to be a
//! single plain path component.

use super::StorageError;
use std::fmt;

/// Extensions reported by [`FontStorage::list`](super::FontStorage::list).
pub const FONT_EXTENSIONS: [&str; 4] = [".ttf", ".woff", ".woff2", ".otf"];

/// A validated font name
///
/// Names are used verbatim as file names. Anything that could resolve to a
/// different directory (separators, `.`/`..`, NUL) is rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontName(String);

impl FontName {
    /// Parse and validate a client-supplied name
    pub fn parse(raw: &str) -> Result<Self, StorageError> {
        if raw.is_empty() || raw == "." || raw == ".." {
            return Err(StorageError::InvalidName(raw.to_string()));
        }
        if raw.contains(['/', '\\', '\0']) {
            return Err(StorageError::InvalidName(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// The name as stored on disk
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extension without the leading dot, if any
    pub fn extension(&self) -> Option<&str> {
        self.0.rsplit_once('.').map(|(_, ext)| ext)
    }
}

impl fmt::Display for FontName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a directory entry name looks like a font file
///
/// Case-sensitive suffix match, so `A.TTF` is not listed.
pub fn is_font_file(name: &str) -> bool {
    FONT_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Content-Type for a font file, inferred from its extension
pub fn content_type(extension: Option<&str>) -> &'static str {
    match extension {
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}
