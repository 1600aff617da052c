use super::extract::extract_zip;
use super::single::read_recipe_file;
use crate::services::config::{ConverterConfig, EntryOrder};
use crate::types::{MelaError, MelaResult, Recipe};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SCRATCH_PREFIX: &str = "melarecipes-";

/// Uniquely named directory holding one archive's extracted members.
///
/// `close` removes it and reports failures; dropping it without `close`
/// (e.g. a cancelled future) still removes it, silently.
pub struct ScratchDir {
    inner: TempDir,
}

impl ScratchDir {
    pub fn create(scratch_root: Option<&Path>) -> MelaResult<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(SCRATCH_PREFIX);
        let inner = match scratch_root {
            Some(root) => builder.tempdir_in(root).map_err(|e| MelaError::io(root, e))?,
            None => builder
                .tempdir()
                .map_err(|e| MelaError::io(&std::env::temp_dir(), e))?,
        };
        log::debug!("Created scratch directory {}", inner.path().display());
        Ok(Self { inner })
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    pub async fn close(self) -> MelaResult<()> {
        let path = self.inner.path().to_path_buf();
        let inner = self.inner;
        tokio::task::spawn_blocking(move || inner.close())
            .await
            .map_err(|e| MelaError::io(&path, std::io::Error::other(e)))?
            .map_err(|e| MelaError::io(&path, e))?;
        log::debug!("Removed scratch directory {}", path.display());
        Ok(())
    }
}

/// Read every recipe in a `.melarecipes` archive.
///
/// The archive is unpacked into a fresh scratch directory which is removed
/// before returning, on success and on failure alike. One bad member fails
/// the whole read.
pub async fn read_recipe_archive(
    archive_path: &Path,
    config: &ConverterConfig,
) -> MelaResult<Vec<Recipe>> {
    let scratch = ScratchDir::create(config.scratch_root.as_deref())?;

    let outcome = extract_and_decode(archive_path, scratch.path(), config.entry_order).await;
    let cleanup = scratch.close().await;

    match (outcome, cleanup) {
        (Ok(recipes), Ok(())) => Ok(recipes),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(cleanup_err)) => {
            log::warn!("Scratch cleanup also failed: {cleanup_err}");
            Err(e)
        }
    }
}

async fn extract_and_decode(
    archive_path: &Path,
    dest: &Path,
    order: EntryOrder,
) -> MelaResult<Vec<Recipe>> {
    let archive = archive_path.to_path_buf();
    let target = dest.to_path_buf();
    let extracted = tokio::task::spawn_blocking(move || extract_zip(&archive, &target))
        .await
        .map_err(|e| {
            MelaError::decompression(archive_path, format!("extraction worker failed: {e}"))
        })??;

    let members = list_regular_files(&extracted.root, order).await?;
    log::info!(
        "Decoding {} recipe file(s) from {} ({} extracted)",
        members.len(),
        archive_path.display(),
        extracted.files_extracted
    );

    let mut recipes = Vec::with_capacity(members.len());
    for member in members {
        recipes.push(read_recipe_file(&member).await?);
    }
    Ok(recipes)
}

/// Top-level regular files of `dir`. Directories and symlinks are skipped.
async fn list_regular_files(dir: &Path, order: EntryOrder) -> MelaResult<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| MelaError::io(dir, e))?;

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(|e| MelaError::io(dir, e))? {
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| MelaError::io(&entry.path(), e))?;
        if file_type.is_file() {
            files.push(entry.path());
        }
    }

    if order == EntryOrder::FileName {
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }
    Ok(files)
}
