use super::ensure_dir;
use super::naming::{output_stem, validate_file_stem};
use crate::types::{MelaError, MelaResult, RecipeData};
use serde::Serialize;
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

/// Write `data` as 4-space indented JSON to `<dir>/<stem>.json`.
///
/// Dates are written in their absolute form, not as exporter offsets.
/// Overwrites an existing file of the same name.
pub async fn write_json(
    dir: &Path,
    data: &RecipeData,
    collection_name: &str,
) -> MelaResult<PathBuf> {
    let stem = output_stem(data, collection_name);
    validate_file_stem(dir, stem)?;
    ensure_dir(dir).await?;

    let target = dir.join(format!("{stem}.json"));
    let bytes = to_pretty_json(data).map_err(|e| MelaError::io(&target, e.into()))?;

    tokio::fs::write(&target, bytes)
        .await
        .map_err(|e| MelaError::io(&target, e))?;

    log::info!("Wrote {} recipe(s) to {}", data.len(), target.display());
    Ok(target)
}

fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}
