use serde::{Deserialize, Serialize};

use crate::language::OutputLanguage;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/recipe/generate";

/// Body of a recipe generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    pub diet: Option<String>,
    pub prep_time: Option<String>,
    pub ingredients: Vec<String>,
    /// Language the prompt itself is written in; always English.
    pub language: String,
    pub output_language: OutputLanguage,
    pub meal_type: Option<String>,
    pub cuisine: Option<String>,
    pub use_only_selected: bool,
    pub prompt: String,
}

/// Body of a translation-only call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub prompt: String,
    pub language: OutputLanguage,
    pub is_translation: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerationRequest {
    Recipe(RecipeRequest),
    Translation(TranslationRequest),
}

/// What the endpoint answers with on success. Only `recipe` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeResponse {
    #[serde(default)]
    pub recipe: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}
