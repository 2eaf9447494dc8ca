//! Turns recipe form options into the natural-language prompt sent to the model,
//! together with the structured request body that mirrors it.

use std::collections::BTreeMap;

use crate::api_connection::endpoints::{GenerationRequest, RecipeRequest, TranslationRequest};
use crate::language::OutputLanguage;
use crate::localization::{label_for, DIETARY_COMPONENTS};
use crate::recipe::{ComponentPreference, RecipeOptions};

const ENGLISH_LANGUAGE_INSTRUCTIONS: &str = "!!! ATTENTION !!! VERY IMPORTANT !!!
GENERATE THIS ENTIRE RECIPE IN ENGLISH LANGUAGE ONLY.
All text must be in English, including recipe name, preparation time, ingredients, and instructions.
Use proper English culinary terminology and measurements throughout.";

const POLISH_LANGUAGE_INSTRUCTIONS: &str = "!!! ATTENTION !!! VERY IMPORTANT !!!
GENERATE THIS ENTIRE RECIPE IN POLISH LANGUAGE ONLY.
All text must be in Polish, including recipe name, preparation time, ingredients, and instructions.
Use proper Polish culinary terminology and measurements throughout.";

const ENGLISH_FINAL_REMINDER: &str = "!!! FINAL REMINDER !!!
THE ENTIRE RECIPE MUST BE OUTPUT IN ENGLISH LANGUAGE ONLY.
Ensure all measurements, ingredients, and cooking terms are in proper English.";

const POLISH_FINAL_REMINDER: &str = "!!! FINAL REMINDER !!!
THE ENTIRE RECIPE MUST BE OUTPUT IN POLISH LANGUAGE ONLY.
Do not include any English text.
Ensure all measurements, ingredients, and cooking terms are in proper Polish.";

const SPECIFICATIONS_HEADER: &str = "Generate a detailed recipe with the following specifications.";

const FORMAT_INSTRUCTIONS: &str = "Format the output exactly as:
<recipe_name>
<prep_time>
<ingredients_needed>
<step_by_step_preparation>

Fill in each section and keep the recipe format clean and readable. Do not use markdown or decorations such as *, # or bold text.";

const ANY: &str = "any";

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationPrompt {
    pub prompt_text: String,
    pub request_payload: GenerationRequest,
}

fn language_instructions(language: OutputLanguage) -> &'static str {
    match language {
        OutputLanguage::English => ENGLISH_LANGUAGE_INSTRUCTIONS,
        OutputLanguage::Polish => POLISH_LANGUAGE_INSTRUCTIONS,
    }
}

fn final_reminder(language: OutputLanguage) -> &'static str {
    match language {
        OutputLanguage::English => ENGLISH_FINAL_REMINDER,
        OutputLanguage::Polish => POLISH_FINAL_REMINDER,
    }
}

fn selected(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ANY))
}

pub(crate) fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn ingredients_clause(options: &RecipeOptions, multiple: bool) -> Option<String> {
    if options.ingredients.is_empty() {
        return None;
    }
    let list = options.ingredients.join(", ");
    let clause = if multiple && options.ingredients.len() > 1 && !options.use_only_selected {
        format!("{list} (use at least one of these ingredients in the recipe)")
    } else if options.use_only_selected {
        format!("{list} (use ONLY these ingredients)")
    } else {
        format!("{list} (you may add complementary ingredients)")
    };
    Some(clause)
}

fn diet_clause(diet: &str) -> String {
    match diet {
        "low_gi" => "Low glycemic index (use ingredients with GI below 55, avoid high GI foods)".to_string(),
        "meat" => "Meat-based (include meat as a main protein source)".to_string(),
        other => capitalize(other),
    }
}

fn component_display_name(component_id: &str) -> String {
    label_for(DIETARY_COMPONENTS, component_id, OutputLanguage::English)
        .map(str::to_string)
        .unwrap_or_else(|| capitalize(component_id))
}

pub fn format_dietary_components(components: &BTreeMap<String, ComponentPreference>) -> String {
    let mut include = Vec::new();
    let mut limit = Vec::new();
    let mut exclude = Vec::new();

    for (component_id, preference) in components {
        let name = component_display_name(component_id);
        match preference {
            ComponentPreference::Include { .. } => match preference.amount() {
                Some(grams) => include.push(format!("{name} (include approx. {grams}g)")),
                None => include.push(format!("{name} (include)")),
            },
            ComponentPreference::Limit { .. } => match preference.amount() {
                Some(grams) => limit.push(format!("{name} (limit to max {grams}g)")),
                None => limit.push(format!("{name} (limit)")),
            },
            ComponentPreference::Exclude => exclude.push(format!("{name} (strictly exclude)")),
            ComponentPreference::Default => {}
        }
    }

    include
        .into_iter()
        .chain(limit)
        .chain(exclude)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `options` is expected in canonical form (see [`RecipeOptions::normalized`]).
/// `diversity_instructions` is appended verbatim when non-empty. `multiple` selects
/// the batch phrasing for ingredient lists.
pub fn build_recipe_prompt(
    options: &RecipeOptions,
    output_language: OutputLanguage,
    diversity_instructions: &str,
    multiple: bool,
) -> GenerationPrompt {
    let mut sections = vec![format!(
        "{}\n\n{}",
        language_instructions(output_language),
        SPECIFICATIONS_HEADER
    )];

    if let Some(prep_time) = selected(options.prep_time.as_deref()) {
        sections.push(format!("Preparation time: {prep_time}"));
    }
    if let Some(ingredients) = ingredients_clause(options, multiple) {
        sections.push(format!("Ingredients: {ingredients}"));
    }
    if let Some(cuisine) = selected(options.cuisine.as_deref()) {
        sections.push(format!("Cuisine: {cuisine}"));
    }
    if let Some(diet) = selected(options.diet.as_deref()) {
        sections.push(format!("Dietary preferences: {}", diet_clause(diet)));
    }
    if let Some(meal_type) = selected(options.meal_type.as_deref()) {
        sections.push(format!("Meal type: {meal_type}"));
    }
    let components = format_dietary_components(&options.dietary_components);
    if !components.is_empty() {
        sections.push(format!("Dietary components: {components}"));
    }

    sections.push(format!(
        "Use variation seed {} to ensure uniqueness.",
        options.random_seed.unwrap_or_default()
    ));
    sections.push(FORMAT_INSTRUCTIONS.to_string());

    if !diversity_instructions.trim().is_empty() {
        sections.push(diversity_instructions.to_string());
    }
    sections.push(final_reminder(output_language).to_string());

    let prompt_text = sections.join("\n\n");

    let request_payload = GenerationRequest::Recipe(RecipeRequest {
        diet: options.diet.clone(),
        prep_time: options.prep_time.clone(),
        ingredients: options.ingredients.clone(),
        language: OutputLanguage::English.as_str().to_string(),
        output_language,
        meal_type: options.meal_type.clone(),
        cuisine: options.cuisine.clone(),
        use_only_selected: options.use_only_selected,
        prompt: prompt_text.clone(),
    });

    GenerationPrompt {
        prompt_text,
        request_payload,
    }
}

pub fn build_translation_prompt(english_recipe: &str) -> GenerationPrompt {
    let prompt_text = format!(
        "Translate the following recipe from English to Polish:
- Translate the recipe name
- Translate preparation time
- Translate ALL ingredients and their measurements
- Translate ALL steps and cooking instructions
- Use proper Polish culinary terminology
- Keep the same section tags (<recipe_name>, <prep_time>, etc.)

Recipe to translate:
{}",
        english_recipe.trim()
    );

    GenerationPrompt {
        request_payload: GenerationRequest::Translation(TranslationRequest {
            prompt: prompt_text.clone(),
            language: OutputLanguage::Polish,
            is_translation: true,
        }),
        prompt_text,
    }
}
