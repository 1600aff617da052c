//! Recipe shapes: the on-disk `.melarecipe` layout and the normalized record.

use crate::services::timestamp::{date_to_offset, offset_to_date};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recipe exactly as the exporting app writes it.
///
/// `date` is seconds since 2001-01-01T00:00:00Z and may be fractional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeFile {
    pub id: String,
    pub date: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "yield", default, skip_serializing_if = "Option::is_none")]
    pub recipe_yield: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub want_to_cook: bool,
    #[serde(default)]
    pub favorite: bool,
}

/// The normalized recipe record with an absolute `date`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "yield", default, skip_serializing_if = "Option::is_none")]
    pub recipe_yield: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub want_to_cook: bool,
    #[serde(default)]
    pub favorite: bool,
}

impl Recipe {
    /// Minimal record with every optional field absent.
    pub fn new(id: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            date,
            images: Vec::new(),
            title: None,
            recipe_yield: None,
            cook_time: None,
            prep_time: None,
            total_time: None,
            link: None,
            text: None,
            ingredients: None,
            instructions: None,
            notes: None,
            nutrition: None,
            categories: Vec::new(),
            want_to_cook: false,
            favorite: false,
        }
    }
}

impl TryFrom<RecipeFile> for Recipe {
    type Error = String;

    fn try_from(file: RecipeFile) -> Result<Self, Self::Error> {
        if file.id.is_empty() {
            return Err("recipe id is empty".to_string());
        }
        let date = offset_to_date(file.date)
            .ok_or_else(|| format!("date offset {} is out of range", file.date))?;

        Ok(Self {
            id: file.id,
            date,
            images: file.images,
            title: file.title,
            recipe_yield: file.recipe_yield,
            cook_time: file.cook_time,
            prep_time: file.prep_time,
            total_time: file.total_time,
            link: file.link,
            text: file.text,
            ingredients: file.ingredients,
            instructions: file.instructions,
            notes: file.notes,
            nutrition: file.nutrition,
            categories: file.categories,
            want_to_cook: file.want_to_cook,
            favorite: file.favorite,
        })
    }
}

impl From<&Recipe> for RecipeFile {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            date: date_to_offset(&recipe.date),
            images: recipe.images.clone(),
            title: recipe.title.clone(),
            recipe_yield: recipe.recipe_yield.clone(),
            cook_time: recipe.cook_time.clone(),
            prep_time: recipe.prep_time.clone(),
            total_time: recipe.total_time.clone(),
            link: recipe.link.clone(),
            text: recipe.text.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            notes: recipe.notes.clone(),
            nutrition: recipe.nutrition.clone(),
            categories: recipe.categories.clone(),
            want_to_cook: recipe.want_to_cook,
            favorite: recipe.favorite,
        }
    }
}

/// Result of reading a container, and input to the writers.
///
/// Serializes untagged: a single record as an object, a collection as an array.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum RecipeData {
    Single(Recipe),
    Collection(Vec<Recipe>),
}

impl RecipeData {
    pub fn len(&self) -> usize {
        match self {
            RecipeData::Single(_) => 1,
            RecipeData::Collection(recipes) => recipes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into a list regardless of which container it came from.
    pub fn into_vec(self) -> Vec<Recipe> {
        match self {
            RecipeData::Single(recipe) => vec![recipe],
            RecipeData::Collection(recipes) => recipes,
        }
    }
}

impl From<Recipe> for RecipeData {
    fn from(recipe: Recipe) -> Self {
        RecipeData::Single(recipe)
    }
}

impl From<Vec<Recipe>> for RecipeData {
    fn from(recipes: Vec<Recipe>) -> Self {
        RecipeData::Collection(recipes)
    }
}

#[cfg(test)]
#[path = "tests/recipe_tests.rs"]
mod tests;
