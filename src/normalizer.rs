use tracing::debug;

use crate::recipe::RecipeOptions;

// Localized form values (with and without diacritics) mapped to canonical tokens.
// New Polish labels in the form need an entry here, or they reach the prompt untranslated.
const CANONICAL_TOKENS: &[(&str, &str)] = &[
    // diets
    ("wegetariańskie", "vegetarian"),
    ("wegetarianskie", "vegetarian"),
    ("wegańskie", "vegan"),
    ("weganskie", "vegan"),
    ("mięsne", "meat"),
    ("miesne", "meat"),
    ("niski_indeks_glikemiczny", "low_gi"),
    // meal types
    ("śniadanie", "breakfast"),
    ("sniadanie", "breakfast"),
    ("obiad", "dinner"),
    ("przekąska", "snack"),
    ("przekaska", "snack"),
    // cuisines
    ("włoska", "italian"),
    ("wloska", "italian"),
    ("polska", "polish"),
    ("meksykańska", "mexican"),
    ("meksykanska", "mexican"),
    ("azjatycka", "asian"),
    ("amerykańska", "american"),
    ("amerykanska", "american"),
    ("francuska", "french"),
];

/// Converts a possibly-localized form value to its canonical English token.
///
/// Unknown values are assumed to be canonical already and are returned unchanged.
pub fn to_canonical(value: Option<&str>) -> Option<String> {
    let value = value.filter(|v| !v.is_empty())?;

    match CANONICAL_TOKENS.iter().find(|(localized, _)| *localized == value) {
        Some((_, canonical)) => Some((*canonical).to_string()),
        None => {
            if !value.is_ascii() {
                debug!(value, "no canonical token for localized value, passing through");
            }
            Some(value.to_string())
        }
    }
}

impl RecipeOptions {
    pub fn normalized(&self) -> RecipeOptions {
        RecipeOptions {
            diet: to_canonical(self.diet.as_deref()),
            meal_type: to_canonical(self.meal_type.as_deref()),
            cuisine: to_canonical(self.cuisine.as_deref()),
            ..self.clone()
        }
    }
}
