use crate::types::{MelaError, MelaResult, RecipeData};
use std::io;
use std::path::Path;

/// Characters that can never appear in a written file stem.
const FORBIDDEN_CHARS: &[char] = &['/', '\\', '\0'];
/// Characters replaced when deriving archive member names from ids.
const ILLEGAL_ENTRY_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*', '\0'];
const MAX_ENTRY_STEM_LEN: usize = 120;

/// File stem for `data`: the collection name for a list, otherwise the
/// recipe title, falling back to its id when the title is absent or blank.
pub fn output_stem<'a>(data: &'a RecipeData, collection_name: &'a str) -> &'a str {
    match data {
        RecipeData::Collection(_) => collection_name,
        RecipeData::Single(recipe) => match recipe.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => &recipe.id,
        },
    }
}

/// Reject stems the filesystem cannot hold as a single path component.
pub fn validate_file_stem(dir: &Path, stem: &str) -> MelaResult<()> {
    let reason = if stem.trim().is_empty() {
        Some("file name is empty")
    } else if stem == "." || stem == ".." {
        Some("file name is a relative path component")
    } else if stem.contains(FORBIDDEN_CHARS) {
        Some("file name contains a path separator or NUL")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(MelaError::io(
            &dir.join(stem),
            io::Error::new(io::ErrorKind::InvalidInput, reason),
        )),
        None => Ok(()),
    }
}

/// Turn a recipe id into something safe to use as an archive member name.
///
/// Ids of web-imported recipes are often URLs, so separators and other
/// reserved characters become `_` and the result is clamped.
pub fn sanitize_entry_name(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|c| if ILLEGAL_ENTRY_CHARS.contains(&c) { '_' } else { c })
        .take(MAX_ENTRY_STEM_LEN)
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        "recipe".to_string()
    } else {
        cleaned
    }
}
