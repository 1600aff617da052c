use super::*;
use crate::services::recipe_file::read_container;
use crate::services::config::ConverterConfig;
use crate::test_utils::init_test_logging;
use crate::types::{Recipe, RecipeData};
use chrono::{TimeZone, Utc};
use std::fs;
use tempfile::TempDir;

fn pancakes() -> Recipe {
    let mut recipe = Recipe::new("pancakes-1", Utc.with_ymd_and_hms(2011, 1, 1, 0, 0, 0).unwrap());
    recipe.title = Some("Pancakes".to_string());
    recipe.recipe_yield = Some("4".to_string());
    recipe.ingredients = Some("Flour\nMilk".to_string());
    recipe.categories = vec!["Breakfast".to_string()];
    recipe.favorite = true;
    recipe
}

// ─── File Naming ─────────────────────────────────────────────────────────────

#[test]
fn test_output_stem_uses_title_then_id() {
    let data = RecipeData::Single(pancakes());
    assert_eq!(output_stem(&data, "Recipes"), "Pancakes");

    let mut untitled = pancakes();
    untitled.title = None;
    assert_eq!(output_stem(&RecipeData::Single(untitled.clone()), "Recipes"), "pancakes-1");

    untitled.title = Some("   ".to_string());
    assert_eq!(output_stem(&RecipeData::Single(untitled), "Recipes"), "pancakes-1");

    let list = RecipeData::Collection(vec![pancakes()]);
    assert_eq!(output_stem(&list, "Recipes"), "Recipes");
}

#[test]
fn test_validate_file_stem() {
    let dir = Path::new("/out");
    assert!(validate_file_stem(dir, "Pancakes").is_ok());
    assert!(validate_file_stem(dir, "Mac & Cheese: Deluxe").is_ok());

    for bad in ["", "  ", ".", "..", "a/b", "a\\b", "nul\0byte"] {
        let err = validate_file_stem(dir, bad).unwrap_err();
        match err {
            MelaError::Io { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidInput)
            }
            other => panic!("Expected MelaError::Io for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_sanitize_entry_name() {
    assert_eq!(
        sanitize_entry_name("www.example.com/recipes/soup?x=1"),
        "www.example.com_recipes_soup_x=1"
    );
    assert_eq!(sanitize_entry_name("  plain-id  "), "plain-id");
    assert_eq!(sanitize_entry_name(""), "recipe");
    assert_eq!(sanitize_entry_name(".."), "recipe");

    let long = "X".repeat(300);
    assert_eq!(sanitize_entry_name(&long).len(), 120);
}

// ─── JSON Writer ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_write_single_named_after_title() {
    init_test_logging();
    let tmp = TempDir::new().unwrap();

    let path = write_json(tmp.path(), &RecipeData::Single(pancakes()), "Recipes")
        .await
        .unwrap();
    assert_eq!(path, tmp.path().join("Pancakes.json"));

    let content = fs::read_to_string(&path).unwrap();
    // 4-space indentation, absolute date
    assert!(content.starts_with("{\n    \"id\": \"pancakes-1\",\n    \"date\": \"2011-01-01T00:00:00Z\""));

    let back: Recipe = serde_json::from_str(&content).unwrap();
    assert_eq!(back, pancakes());
}

#[tokio::test]
async fn test_write_list_always_named_recipes() {
    let tmp = TempDir::new().unwrap();

    let path = write_json(tmp.path(), &RecipeData::Collection(vec![pancakes()]), "Recipes")
        .await
        .unwrap();
    assert_eq!(path, tmp.path().join("Recipes.json"));
    let back: Vec<Recipe> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(back, vec![pancakes()]);

    let path = write_json(tmp.path(), &RecipeData::Collection(Vec::new()), "Recipes")
        .await
        .unwrap();
    assert_eq!(path, tmp.path().join("Recipes.json"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[tokio::test]
async fn test_write_overwrites_and_creates_nothing_else() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Pancakes.json"), "stale").unwrap();

    write_json(tmp.path(), &RecipeData::Single(pancakes()), "Recipes")
        .await
        .unwrap();

    let names: Vec<_> = fs::read_dir(tmp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["Pancakes.json"]);
    assert_ne!(fs::read_to_string(tmp.path().join("Pancakes.json")).unwrap(), "stale");
}

#[tokio::test]
async fn test_write_untitled_falls_back_to_id() {
    let tmp = TempDir::new().unwrap();
    let mut recipe = pancakes();
    recipe.title = None;

    let path = write_json(tmp.path(), &RecipeData::Single(recipe), "Recipes")
        .await
        .unwrap();
    assert_eq!(path, tmp.path().join("pancakes-1.json"));
}

#[tokio::test]
async fn test_write_to_missing_dir_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope");

    let err = write_json(&missing, &RecipeData::Single(pancakes()), "Recipes")
        .await
        .unwrap_err();
    assert!(matches!(err, MelaError::Io { .. }));
    assert!(!missing.exists());
}

#[tokio::test]
async fn test_write_to_file_path_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("plain.txt");
    fs::write(&file, "x").unwrap();

    let err = write_json(&file, &RecipeData::Single(pancakes()), "Recipes")
        .await
        .unwrap_err();
    assert!(matches!(err, MelaError::Io { .. }));
}

#[tokio::test]
async fn test_write_title_with_separator_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let mut recipe = pancakes();
    recipe.title = Some("Half/Half".to_string());

    let err = write_json(tmp.path(), &RecipeData::Single(recipe), "Recipes")
        .await
        .unwrap_err();
    assert!(matches!(err, MelaError::Io { .. }));
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

// ─── Native Writer ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_native_single_round_trip() {
    let tmp = TempDir::new().unwrap();

    let path = write_native(tmp.path(), &RecipeData::Single(pancakes()), "Recipes")
        .await
        .unwrap();
    assert_eq!(path, tmp.path().join("Pancakes.melarecipe"));

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["date"], serde_json::json!(631152000.0));

    let back = read_container(&path, &ConverterConfig::default())
        .await
        .unwrap();
    assert_eq!(back, RecipeData::Single(pancakes()));
}

#[tokio::test]
async fn test_native_archive_round_trip_keeps_order() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");
    fs::create_dir(&out).unwrap();

    let mut web = pancakes();
    web.id = "www.example.com/zucchini".to_string();
    web.title = Some("Zucchini Bread".to_string());
    let mut other = pancakes();
    other.id = "aaa".to_string();
    let recipes = vec![web, pancakes(), other];

    let path = write_native(&out, &RecipeData::Collection(recipes.clone()), "Recipes")
        .await
        .unwrap();
    assert_eq!(path, out.join("Recipes.melarecipes"));

    let config = ConverterConfig {
        scratch_root: Some(tmp.path().to_path_buf()),
        ..Default::default()
    };
    let back = read_container(&path, &config).await.unwrap();
    assert_eq!(back, RecipeData::Collection(recipes));
}
