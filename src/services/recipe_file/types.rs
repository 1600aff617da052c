use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SINGLE_EXTENSION: &str = "melarecipe";
pub const COLLECTION_EXTENSION: &str = "melarecipes";

/// Recipe container kind, decided by file extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerFormat {
    /// `.melarecipe`: one JSON document.
    Single,
    /// `.melarecipes`: a ZIP of JSON documents.
    Collection,
}

impl ContainerFormat {
    /// Detect format from file extension. Matching is case-sensitive.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            SINGLE_EXTENSION => Some(Self::Single),
            COLLECTION_EXTENSION => Some(Self::Collection),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Single => SINGLE_EXTENSION,
            Self::Collection => COLLECTION_EXTENSION,
        }
    }
}

/// Where an archive was unpacked and how many files came out.
#[derive(Debug, Clone)]
pub struct ExtractedArchive {
    pub root: std::path::PathBuf,
    pub files_extracted: usize,
}
