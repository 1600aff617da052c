use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MelaError {
    #[error("Unsupported format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },
    #[error("Parse error in {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
    #[error("Decompression error in {}: {reason}", path.display())]
    Decompression { path: PathBuf, reason: String },
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MelaError {
    pub fn parse(path: &Path, reason: impl Into<String>) -> Self {
        MelaError::Parse {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn decompression(path: &Path, reason: impl Into<String>) -> Self {
        MelaError::Decompression {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        MelaError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl Serialize for MelaError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type MelaResult<T> = Result<T, MelaError>;
