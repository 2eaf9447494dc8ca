use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::language::OutputLanguage;

/// How a nutrient component should be treated by the generated recipe.
///
/// Amounts are grams and only exist for `Include` and `Limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "preference", rename_all = "lowercase")]
pub enum ComponentPreference {
    Include {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        amount: Option<u32>,
    },
    Limit {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        amount: Option<u32>,
    },
    Exclude,
    #[default]
    Default,
}

impl ComponentPreference {
    pub fn amount(&self) -> Option<u32> {
        match self {
            ComponentPreference::Include { amount } | ComponentPreference::Limit { amount } => {
                amount.filter(|grams| *grams > 0)
            }
            ComponentPreference::Exclude | ComponentPreference::Default => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub display_language: OutputLanguage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub use_only_selected: bool,
    #[serde(default)]
    pub dietary_components: BTreeMap<String, ComponentPreference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub content: String,
    pub name: String,
    #[serde(default)]
    pub expanded: bool,
}

impl Recipe {
    pub fn new(content: String, name: String) -> Self {
        Self {
            content,
            name,
            expanded: false,
        }
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }
}
