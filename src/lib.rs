pub mod api_connection;
pub mod cli;
pub mod config;
pub mod fallback;
pub mod generator;
pub mod language;
pub mod localization;
pub mod normalizer;
pub mod prompt_builder;
pub mod recipe;
pub mod recipe_parser;
pub mod storage;
