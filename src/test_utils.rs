use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        // Initialize logger only once
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Wire-format JSON for one recipe with a few optional fields filled in.
pub fn recipe_json(id: &str, title: &str, date: f64) -> String {
    serde_json::json!({
        "id": id,
        "date": date,
        "images": [],
        "title": title,
        "ingredients": "Flour\nWater",
        "categories": ["Test"],
        "wantToCook": false,
        "favorite": true,
    })
    .to_string()
}

/// Helper: create a ZIP with the given entries. Names ending in `/` become
/// directory entries.
pub fn create_test_zip(dir: &Path, name: &str, files: &[(&str, &[u8])]) -> PathBuf {
    let zip_path = dir.join(name);
    let file = fs::File::create(&zip_path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options =
        zip::write::SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (entry_name, content) in files {
        if entry_name.ends_with('/') {
            writer.add_directory(entry_name.to_string(), options).unwrap();
            continue;
        }
        writer.start_file(entry_name.to_string(), options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap();
    zip_path
}

/// Number of entries directly under `dir`.
pub fn count_entries(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}
