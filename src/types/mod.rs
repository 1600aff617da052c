pub mod errors;
pub mod recipe;

pub use errors::{MelaError, MelaResult};
pub use recipe::{Recipe, RecipeData, RecipeFile};

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod errors_tests;
