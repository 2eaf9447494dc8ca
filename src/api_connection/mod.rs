pub mod connection;
pub mod endpoints;

pub use connection::{GenerationError, HttpRecipeClient, RecipeGenerator};
pub use endpoints::{GenerationRequest, RecipeRequest, RecipeResponse, TranslationRequest};
