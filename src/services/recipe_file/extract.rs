use super::types::ExtractedArchive;
use crate::types::{MelaError, MelaResult};
use std::fs;
use std::io;
use std::path::Path;

/// Unpack a ZIP archive into `dest_path`, which must already exist.
///
/// Blocking; callers on the runtime go through `spawn_blocking`.
/// Entries whose names would land outside `dest_path` are skipped.
pub fn extract_zip(archive_path: &Path, dest_path: &Path) -> MelaResult<ExtractedArchive> {
    let file = fs::File::open(archive_path).map_err(|e| {
        MelaError::decompression(archive_path, format!("failed to open archive: {e}"))
    })?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| MelaError::decompression(archive_path, format!("invalid or corrupt ZIP: {e}")))?;

    let mut count: usize = 0;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(|e| {
            MelaError::decompression(archive_path, format!("failed to read entry {i}: {e}"))
        })?;

        let entry_path = match entry.enclosed_name() {
            Some(p) => p.to_path_buf(),
            None => {
                log::warn!(
                    "Skipping unsafe entry '{}' in {}",
                    entry.name(),
                    archive_path.display()
                );
                continue;
            }
        };

        let output_path = dest_path.join(&entry_path);

        if entry.is_dir() {
            fs::create_dir_all(&output_path).map_err(|e| MelaError::io(&output_path, e))?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent).map_err(|e| MelaError::io(parent, e))?;
            }
            let mut outfile =
                fs::File::create(&output_path).map_err(|e| MelaError::io(&output_path, e))?;
            io::copy(&mut entry, &mut outfile).map_err(|e| {
                MelaError::decompression(archive_path, format!("failed to inflate entry {i}: {e}"))
            })?;
            count += 1;
        }
    }

    log::debug!(
        "Extracted {count} file(s) from {} into {}",
        archive_path.display(),
        dest_path.display()
    );

    Ok(ExtractedArchive {
        root: dest_path.to_path_buf(),
        files_extracted: count,
    })
}
