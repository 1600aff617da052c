pub mod config;
pub mod converter;
pub mod export;
pub mod recipe_file;
pub mod timestamp;
