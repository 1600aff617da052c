use super::ensure_dir;
use super::naming::{output_stem, sanitize_entry_name, validate_file_stem};
use crate::services::recipe_file::ContainerFormat;
use crate::types::{MelaError, MelaResult, Recipe, RecipeData, RecipeFile};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Write `data` back in the exporter's own format: one record as
/// `<stem>.melarecipe`, a list as `<collection_name>.melarecipes`.
pub async fn write_native(
    dir: &Path,
    data: &RecipeData,
    collection_name: &str,
) -> MelaResult<PathBuf> {
    let stem = output_stem(data, collection_name);
    match data {
        RecipeData::Single(recipe) => write_recipe_file(dir, stem, recipe).await,
        RecipeData::Collection(recipes) => write_recipe_archive(dir, stem, recipes).await,
    }
}

/// Write one `.melarecipe` document with its date encoded as an offset.
pub async fn write_recipe_file(dir: &Path, stem: &str, recipe: &Recipe) -> MelaResult<PathBuf> {
    validate_file_stem(dir, stem)?;
    ensure_dir(dir).await?;

    let target = dir.join(format!("{stem}.{}", ContainerFormat::Single.extension()));
    let bytes = serde_json::to_vec(&RecipeFile::from(recipe))
        .map_err(|e| MelaError::io(&target, e.into()))?;

    tokio::fs::write(&target, bytes)
        .await
        .map_err(|e| MelaError::io(&target, e))?;
    log::info!("Wrote recipe '{}' to {}", recipe.id, target.display());
    Ok(target)
}

/// Write a `.melarecipes` ZIP with one member per recipe.
///
/// Members are named `NNNN-<id>.melarecipe` so that file-name order
/// matches list order when read back.
pub async fn write_recipe_archive(
    dir: &Path,
    stem: &str,
    recipes: &[Recipe],
) -> MelaResult<PathBuf> {
    validate_file_stem(dir, stem)?;
    ensure_dir(dir).await?;

    let target = dir.join(format!("{stem}.{}", ContainerFormat::Collection.extension()));

    let mut members = Vec::with_capacity(recipes.len());
    for (index, recipe) in recipes.iter().enumerate() {
        let name = format!(
            "{index:04}-{}.{}",
            sanitize_entry_name(&recipe.id),
            ContainerFormat::Single.extension()
        );
        let bytes = serde_json::to_vec(&RecipeFile::from(recipe))
            .map_err(|e| MelaError::io(&target, e.into()))?;
        members.push((name, bytes));
    }

    let archive_path = target.clone();
    tokio::task::spawn_blocking(move || write_zip(&archive_path, members))
        .await
        .map_err(|e| MelaError::io(&target, io::Error::other(e)))?
        .map_err(|e| MelaError::io(&target, e))?;

    log::info!("Wrote {} recipe(s) to {}", recipes.len(), target.display());
    Ok(target)
}

fn write_zip(archive_path: &Path, members: Vec<(String, Vec<u8>)>) -> io::Result<()> {
    let file = fs::File::create(archive_path)?;
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    for (name, bytes) in members {
        writer.start_file(name, options).map_err(io::Error::other)?;
        writer.write_all(&bytes)?;
    }
    writer.finish().map_err(io::Error::other)?;
    Ok(())
}
