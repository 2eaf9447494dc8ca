//! Offline placeholder recipes used while the generation endpoint is unreachable.

use serde::Serialize;
use std::fmt;

use crate::language::OutputLanguage;
use crate::prompt_builder::capitalize;
use crate::recipe::RecipeOptions;

/// Tells the caller a result is a placeholder, not a generated recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegradedNotice {
    pub language: OutputLanguage,
    /// Why the endpoint could not be used.
    pub reason: String,
}

impl DegradedNotice {
    pub fn new(language: OutputLanguage, reason: impl Into<String>) -> Self {
        Self {
            language,
            reason: reason.into(),
        }
    }

    pub fn message(&self) -> &'static str {
        match self.language {
            OutputLanguage::English => {
                "Server unavailable. A mock recipe has been generated. Check the logs for prompt details."
            }
            OutputLanguage::Polish => {
                "Serwer niedostępny. Wygenerowano przykładowy przepis. Szczegóły zapytania znajdziesz w logach."
            }
        }
    }
}

impl fmt::Display for DegradedNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

struct FallbackText {
    recipe: &'static str,
    prep_label: &'static str,
    minutes: &'static str,
    ingredient: &'static str,
    steps: [&'static str; 3],
}

const ENGLISH: FallbackText = FallbackText {
    recipe: "Mock Recipe",
    prep_label: "Preparation time: ",
    minutes: "minutes",
    ingredient: "Mock ingredient",
    steps: [
        "This is a mock recipe created because the server is unavailable.",
        "The prompt has been logged for testing.",
        "Check the application logs to see the complete prompt.",
    ],
};

const POLISH: FallbackText = FallbackText {
    recipe: "Przykładowy Przepis",
    prep_label: "Czas przygotowania: ",
    minutes: "minut",
    ingredient: "Przykładowy składnik",
    steps: [
        "To jest przykładowy przepis utworzony, ponieważ serwer jest niedostępny.",
        "Zapytanie zostało zapisane w logach do celów testowych.",
        "Sprawdź logi aplikacji, aby zobaczyć pełne zapytanie.",
    ],
};

fn prep_minutes(prep_time: Option<&str>) -> u32 {
    match prep_time {
        Some("quick") => 15,
        Some("medium") => 45,
        Some("long") => 90,
        _ => 30,
    }
}

pub fn build_fallback_recipe(options: &RecipeOptions, language: OutputLanguage) -> String {
    let text = match language {
        OutputLanguage::English => &ENGLISH,
        OutputLanguage::Polish => &POLISH,
    };

    let cuisine_prefix = options
        .cuisine
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("any"))
        .map(|c| format!("{} ", capitalize(c)))
        .unwrap_or_default();
    let seed_suffix = options.random_seed.unwrap_or_default() % 1000;

    let mut lines = vec![
        "<recipe_name>".to_string(),
        format!("{cuisine_prefix}{} {seed_suffix}", text.recipe),
        String::new(),
        "<prep_time>".to_string(),
        format!(
            "{}{} {}",
            text.prep_label,
            prep_minutes(options.prep_time.as_deref()),
            text.minutes
        ),
        String::new(),
        "<ingredients_needed>".to_string(),
    ];
    lines.extend((1..=3).map(|n| format!("- {} {n}", text.ingredient)));
    lines.extend(options.ingredients.iter().map(|ingredient| format!("- {ingredient}")));
    lines.push(String::new());
    lines.push("<step_by_step_preparation>".to_string());
    lines.extend(
        text.steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {step}", i + 1)),
    );

    lines.join("\n")
}
