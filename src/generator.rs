use rand::Rng;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::api_connection::{GenerationError, RecipeGenerator};
use crate::fallback::{build_fallback_recipe, DegradedNotice};
use crate::language::OutputLanguage;
use crate::prompt_builder::{build_recipe_prompt, build_translation_prompt, GenerationPrompt};
use crate::recipe::{Recipe, RecipeOptions};
use crate::recipe_parser::extract_recipe_name;

pub const MAX_BATCH_SIZE: usize = 7;
pub const DEFAULT_MAX_DUPLICATE_RETRIES: u32 = 3;

// Seeds are spread per slot so two slots never share a seed range.
const SLOT_SEED_STRIDE: u32 = 1000;
const SEED_JITTER: u32 = 10_000;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("batch size must be between 1 and 7, got {0}")]
    InvalidCount(usize),
    #[error("failed to generate recipes: {0}")]
    Generation(#[from] GenerationError),
    #[error("recipe batch cancelled")]
    Cancelled { partial: BatchOutcome },
}

/// Shared flag a caller flips to stop a running batch before its next request.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub content: String,
    pub notice: Option<DegradedNotice>,
}

impl GenerationOutcome {
    pub fn is_degraded(&self) -> bool {
        self.notice.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub recipes: Vec<Recipe>,
    pub notices: Vec<DegradedNotice>,
}

impl BatchOutcome {
    pub fn is_degraded(&self) -> bool {
        !self.notices.is_empty()
    }
}

pub fn diversity_instructions(accepted: &[Recipe]) -> String {
    if accepted.is_empty() {
        return String::new();
    }
    let previous_names = accepted
        .iter()
        .map(|recipe| recipe.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "IMPORTANT: Create a recipe that is significantly different from the following recipes already generated: {previous_names}.\n\
         Use different main techniques, cooking methods, flavor profiles, or ingredient combinations."
    )
}

fn random_seed_component() -> u32 {
    rand::thread_rng().gen_range(0..SEED_JITTER)
}

/// Drives prompt building, the remote call and the offline fallback.
pub struct RecipeGenerationService<G> {
    generator: G,
    max_duplicate_retries: u32,
}

impl<G: RecipeGenerator> RecipeGenerationService<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            max_duplicate_retries: DEFAULT_MAX_DUPLICATE_RETRIES,
        }
    }

    pub fn with_max_duplicate_retries(mut self, retries: u32) -> Self {
        self.max_duplicate_retries = retries;
        self
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    async fn execute_with_fallback(
        &self,
        prompt: &GenerationPrompt,
        options: &RecipeOptions,
        language: OutputLanguage,
    ) -> Result<GenerationOutcome, GenerationError> {
        match self.generator.execute(prompt).await {
            Ok(content) => Ok(GenerationOutcome {
                content,
                notice: None,
            }),
            Err(err) if err.is_transport() => {
                warn!(
                    error = %err,
                    diet = ?options.diet,
                    prep_time = ?options.prep_time,
                    ingredients = ?options.ingredients,
                    meal_type = ?options.meal_type,
                    cuisine = ?options.cuisine,
                    use_only_selected = options.use_only_selected,
                    "recipe endpoint unavailable, using offline recipe"
                );
                warn!("prompt that could not be sent:\n{}", prompt.prompt_text);
                Ok(GenerationOutcome {
                    content: build_fallback_recipe(options, language),
                    notice: Some(DegradedNotice::new(language, err.to_string())),
                })
            }
            Err(err) => {
                error!(error = %err, "failed to generate recipe");
                error!("prompt of the failed request:\n{}", prompt.prompt_text);
                Err(err)
            }
        }
    }

    /// Only protocol errors are returned; an unreachable endpoint yields the
    /// offline recipe with a [`DegradedNotice`].
    pub async fn generate_recipe(
        &self,
        options: &RecipeOptions,
    ) -> Result<GenerationOutcome, GenerationError> {
        let options = RecipeOptions {
            random_seed: Some(options.random_seed.unwrap_or_else(random_seed_component)),
            ..options.clone()
        };
        let language = options.display_language;
        let prompt = build_recipe_prompt(&options.normalized(), language, "", false);
        self.execute_with_fallback(&prompt, &options, language).await
    }

    /// A slot whose result repeats an accepted name (case-insensitively) is
    /// regenerated up to the configured retry limit; after that the duplicate is kept.
    pub async fn generate_batch(
        &self,
        options: &RecipeOptions,
        count: usize,
        cancel: &CancellationToken,
    ) -> Result<BatchOutcome, BatchError> {
        if !(1..=MAX_BATCH_SIZE).contains(&count) {
            return Err(BatchError::InvalidCount(count));
        }

        let language = options.display_language;
        let canonical = options.normalized();
        let base_seed = options.random_seed.unwrap_or_default();

        let mut recipes: Vec<Recipe> = Vec::with_capacity(count);
        let mut notices = Vec::new();
        let mut used_names: HashSet<String> = HashSet::new();

        while recipes.len() < count {
            let slot = recipes.len();
            let mut duplicate_retries = 0;

            loop {
                if cancel.is_cancelled() {
                    info!(accepted = recipes.len(), requested = count, "recipe batch cancelled");
                    return Err(BatchError::Cancelled {
                        partial: BatchOutcome { recipes, notices },
                    });
                }

                let seed = base_seed
                    .wrapping_add(slot as u32 * SLOT_SEED_STRIDE)
                    .wrapping_add(random_seed_component());
                let slot_options = RecipeOptions {
                    random_seed: Some(seed),
                    ..canonical.clone()
                };
                let fallback_options = RecipeOptions {
                    random_seed: Some(seed),
                    ..options.clone()
                };

                let diversity = diversity_instructions(&recipes);
                let prompt = build_recipe_prompt(&slot_options, language, &diversity, true);
                let outcome = self
                    .execute_with_fallback(&prompt, &fallback_options, language)
                    .await?;

                let name = extract_recipe_name(&outcome.content);
                let key = name.to_lowercase();
                if used_names.contains(&key) {
                    if duplicate_retries < self.max_duplicate_retries {
                        duplicate_retries += 1;
                        warn!(slot, name = %name, attempt = duplicate_retries, "duplicate recipe name, regenerating");
                        continue;
                    }
                    warn!(slot, name = %name, "duplicate retries exhausted, keeping duplicate recipe");
                }

                used_names.insert(key);
                notices.extend(outcome.notice);
                recipes.push(Recipe::new(outcome.content, name));
                break;
            }
        }

        Ok(BatchOutcome { recipes, notices })
    }

    /// Any failure returns the English text unchanged.
    pub async fn translate_recipe(&self, english_recipe: &str) -> String {
        let prompt = build_translation_prompt(english_recipe);
        match self.generator.execute(&prompt).await {
            Ok(translated) => translated,
            Err(err) => {
                warn!(error = %err, "translation failed, using English recipe instead");
                if err.is_transport() {
                    warn!("translation prompt that could not be sent:\n{}", prompt.prompt_text);
                }
                english_recipe.to_string()
            }
        }
    }
}
