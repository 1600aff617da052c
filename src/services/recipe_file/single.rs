use crate::types::{MelaError, MelaResult, Recipe, RecipeFile};
use std::path::Path;

/// Read one `.melarecipe` document and convert its date offset.
pub async fn read_recipe_file(path: &Path) -> MelaResult<Recipe> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| MelaError::io(path, e))?;
    decode_recipe(path, bytes)
}

fn decode_recipe(path: &Path, bytes: Vec<u8>) -> MelaResult<Recipe> {
    let content =
        String::from_utf8(bytes).map_err(|e| MelaError::parse(path, format!("not UTF-8: {e}")))?;

    let file: RecipeFile = serde_json::from_str(&content)
        .map_err(|e| MelaError::parse(path, format!("invalid recipe JSON: {e}")))?;

    let recipe = Recipe::try_from(file).map_err(|reason| MelaError::parse(path, reason))?;
    log::debug!("Decoded recipe '{}' from {}", recipe.id, path.display());
    Ok(recipe)
}
