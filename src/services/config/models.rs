use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Order in which archive members are decoded.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EntryOrder {
    /// Byte-wise file name order.
    #[default]
    FileName,
    /// Whatever the directory listing yields. Not stable across platforms.
    Listing,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ConverterConfig {
    /// Parent for scratch directories; `None` uses the system temp dir.
    pub scratch_root: Option<PathBuf>,
    pub entry_order: EntryOrder,
    /// File stem used when a list of recipes is written.
    pub collection_file_name: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            scratch_root: None,
            entry_order: EntryOrder::FileName,
            collection_file_name: "Recipes".into(),
        }
    }
}
