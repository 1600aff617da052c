//! Public entry points, bound to a [`ConverterConfig`].

use crate::services::config::ConverterConfig;
use crate::services::{export, recipe_file};
use crate::types::{MelaResult, RecipeData};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct RecipeConverter {
    config: ConverterConfig,
}

impl RecipeConverter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Read a `.melarecipe` or `.melarecipes` file.
    pub async fn read_from_file(&self, path: &Path) -> MelaResult<RecipeData> {
        recipe_file::read_container(path, &self.config).await
    }

    /// Write `data` as pretty JSON into `dir`; returns the written path.
    pub async fn write_to_dir(&self, dir: &Path, data: &RecipeData) -> MelaResult<PathBuf> {
        export::write_json(dir, data, &self.config.collection_file_name).await
    }

    /// Write `data` into `dir` in the exporter's native container format.
    pub async fn export_native(&self, dir: &Path, data: &RecipeData) -> MelaResult<PathBuf> {
        export::write_native(dir, data, &self.config.collection_file_name).await
    }
}

/// [`RecipeConverter::read_from_file`] with default settings.
pub async fn read_from_file(path: impl AsRef<Path>) -> MelaResult<RecipeData> {
    RecipeConverter::default()
        .read_from_file(path.as_ref())
        .await
}

/// [`RecipeConverter::write_to_dir`] with default settings.
pub async fn write_to_dir(dir: impl AsRef<Path>, data: &RecipeData) -> MelaResult<PathBuf> {
    RecipeConverter::default()
        .write_to_dir(dir.as_ref(), data)
        .await
}
