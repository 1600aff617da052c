//! Writers for recipe records.
//!
//! - [`write_json`]: pretty JSON with absolute dates, `<dir>/<stem>.json`.
//! - [`write_native`]: the exporter's own `.melarecipe` / `.melarecipes` formats.

mod json;
mod naming;
mod native;

pub use json::write_json;
pub use naming::{output_stem, sanitize_entry_name, validate_file_stem};
pub use native::{write_native, write_recipe_archive, write_recipe_file};

use crate::types::{MelaError, MelaResult};
use std::path::Path;

/// Fail unless `dir` exists and is a directory. Never creates it.
async fn ensure_dir(dir: &Path) -> MelaResult<()> {
    let meta = tokio::fs::metadata(dir)
        .await
        .map_err(|e| MelaError::io(dir, e))?;
    if !meta.is_dir() {
        return Err(MelaError::io(dir, std::io::Error::other("not a directory")));
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/export_tests.rs"]
mod tests;
