//! Reader and writer for Mela recipe exports.
//!
//! `.melarecipe` files hold one recipe as JSON with a numeric date offset;
//! `.melarecipes` files are ZIP archives of those. Both decode into
//! [`Recipe`] records, which can be written back out as plain JSON.

pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

pub use services::config::{ConverterConfig, EntryOrder};
pub use services::converter::{read_from_file, write_to_dir, RecipeConverter};
pub use services::recipe_file::ContainerFormat;
pub use services::timestamp::{date_to_offset, offset_to_date, REFERENCE_UNIX_MILLIS};
pub use types::{MelaError, MelaResult, Recipe, RecipeData, RecipeFile};
