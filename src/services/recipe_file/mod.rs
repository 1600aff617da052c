//! Readers for the exporter's recipe containers.
//!
//! - `.melarecipe`: one JSON document, decoded by [`read_recipe_file`].
//! - `.melarecipes`: a ZIP of such documents, decoded by [`read_recipe_archive`].
//!
//! [`read_container`] picks between them by extension.

mod collection;
mod extract;
mod single;
mod types;

// Re-export public API
pub use collection::{read_recipe_archive, ScratchDir};
pub use extract::extract_zip;
pub use single::read_recipe_file;
pub use types::{ContainerFormat, ExtractedArchive, COLLECTION_EXTENSION, SINGLE_EXTENSION};

use crate::services::config::ConverterConfig;
use crate::types::{MelaError, MelaResult, RecipeData};
use std::path::Path;

/// Read a container, routing on its extension. Unknown extensions fail
/// before any file is touched.
pub async fn read_container(path: &Path, config: &ConverterConfig) -> MelaResult<RecipeData> {
    let format = ContainerFormat::from_path(path).ok_or_else(|| MelaError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    log::debug!("Reading {:?} container {}", format, path.display());

    match format {
        ContainerFormat::Single => read_recipe_file(path).await.map(RecipeData::Single),
        ContainerFormat::Collection => read_recipe_archive(path, config)
            .await
            .map(RecipeData::Collection),
    }
}

#[cfg(test)]
#[path = "tests/recipe_file_tests.rs"]
mod tests;
