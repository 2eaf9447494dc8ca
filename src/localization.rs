//! Bilingual (English/Polish) labels for every option the recipe form offers.
//!
//! The `value` of each entry is the canonical English token that ends up in
//! prompts and request payloads; labels are display text only.

use crate::language::OutputLanguage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub en: &'static str,
    pub pl: &'static str,
}

impl Label {
    pub fn get(&self, language: OutputLanguage) -> &'static str {
        match language {
            OutputLanguage::English => self.en,
            OutputLanguage::Polish => self.pl,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedOption {
    pub value: &'static str,
    pub label: Label,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedIngredient {
    pub value: &'static str,
    pub label: Label,
    pub category: &'static str,
}

const fn opt(value: &'static str, en: &'static str, pl: &'static str) -> LocalizedOption {
    LocalizedOption {
        value,
        label: Label { en, pl },
    }
}

const fn ing(
    value: &'static str,
    en: &'static str,
    pl: &'static str,
    category: &'static str,
) -> LocalizedIngredient {
    LocalizedIngredient {
        value,
        label: Label { en, pl },
        category,
    }
}

pub const DIETS: &[LocalizedOption] = &[
    opt("vegetarian", "Vegetarian", "Wegetariańskie"),
    opt("vegan", "Vegan", "Wegańskie"),
    opt("meat", "Meat-based", "Mięsne"),
    opt("low_gi", "Low Glycemic Index", "Niski indeks glikemiczny"),
];

pub const PREP_TIMES: &[LocalizedOption] = &[
    opt("any", "Any time", "Dowolny czas"),
    opt("quick", "Quick (< 20 mins)", "Szybko (< 20 min)"),
    opt("medium", "Medium (20-60 mins)", "Średnio (20-60 min)"),
    opt("long", "Long (> 1 hour)", "Długo (> 1 godz)"),
];

pub const MEAL_TYPES: &[LocalizedOption] = &[
    opt("breakfast", "Breakfast", "Śniadanie"),
    opt("lunch", "Lunch", "Obiad"),
    opt("dinner", "Dinner", "Kolacja"),
    opt("snack", "Snack", "Przekąska"),
];

pub const CUISINES: &[LocalizedOption] = &[
    opt("italian", "Italian", "Włoska"),
    opt("polish", "Polish", "Polska"),
    opt("mexican", "Mexican", "Meksykańska"),
    opt("asian", "Asian", "Azjatycka"),
    opt("american", "American", "Amerykańska"),
    opt("french", "French", "Francuska"),
];

pub const DIETARY_COMPONENTS: &[LocalizedOption] = &[
    opt("carbohydrates", "Carbohydrates", "Węglowodany"),
    opt("proteins", "Proteins", "Białka"),
    opt("fats", "Fats", "Tłuszcze"),
    opt("sugars", "Sugars", "Cukry"),
    opt("fiber", "Fiber", "Błonnik"),
    opt("sodium", "Sodium", "Sód"),
    opt("cholesterol", "Cholesterol", "Cholesterol"),
];

pub const INGREDIENT_CATEGORIES: &[LocalizedOption] = &[
    opt("meats", "Meats", "Mięso"),
    opt("seafood", "Fish & Seafood", "Ryby i Owoce Morza"),
    opt("plant_protein", "Plant-based Proteins", "Białka Roślinne"),
    opt("grains", "Grains", "Zboża"),
    opt("vegetables", "Vegetables", "Warzywa"),
    opt("dairy", "Dairy & Eggs", "Nabiał i Jajka"),
    opt("legumes", "Legumes", "Rośliny Strączkowe"),
    opt("fruits", "Fruits", "Owoce"),
    opt("nuts", "Nuts & Seeds", "Orzechy i Nasiona"),
    opt("herbs", "Herbs & Spices", "Zioła i Przyprawy"),
];

pub const COMMON_INGREDIENTS: &[LocalizedIngredient] = &[
    ing("Chicken", "Chicken", "Kurczak", "meats"),
    ing("Beef", "Beef", "Wołowina", "meats"),
    ing("Pork", "Pork", "Wieprzowina", "meats"),
    ing("Turkey", "Turkey", "Indyk", "meats"),
    ing("Duck", "Duck", "Kaczka", "meats"),
    ing("Lamb", "Lamb", "Jagnięcina", "meats"),
    ing("Ground meat", "Ground meat", "Mięso mielone", "meats"),
    ing("Salmon", "Salmon", "Łosoś", "seafood"),
    ing("Tuna", "Tuna", "Tuńczyk", "seafood"),
    ing("Cod", "Cod", "Dorsz", "seafood"),
    ing("Shrimp", "Shrimp", "Krewetki", "seafood"),
    ing("Trout", "Trout", "Pstrąg", "seafood"),
    ing("Tofu", "Tofu", "Tofu", "plant_protein"),
    ing("Tempeh", "Tempeh", "Tempeh", "plant_protein"),
    ing("Seitan", "Seitan", "Seitan", "plant_protein"),
    ing("Rice", "Rice", "Ryż", "grains"),
    ing("Pasta", "Pasta", "Makaron", "grains"),
    ing("Quinoa", "Quinoa", "Quinoa", "grains"),
    ing("Couscous", "Couscous", "Kuskus", "grains"),
    ing("Bulgur", "Bulgur", "Bulgur", "grains"),
    ing("Oats", "Oats", "Owies", "grains"),
    ing("Barley", "Barley", "Jęczmień", "grains"),
    ing("Potatoes", "Potatoes", "Ziemniaki", "vegetables"),
    ing("Sweet potatoes", "Sweet potatoes", "Bataty", "vegetables"),
    ing("Onions", "Onions", "Cebula", "vegetables"),
    ing("Garlic", "Garlic", "Czosnek", "vegetables"),
    ing("Tomatoes", "Tomatoes", "Pomidory", "vegetables"),
    ing("Bell peppers", "Bell peppers", "Papryka", "vegetables"),
    ing("Mushrooms", "Mushrooms", "Grzyby", "vegetables"),
    ing("Zucchini", "Zucchini", "Cukinia", "vegetables"),
    ing("Eggplant", "Eggplant", "Bakłażan", "vegetables"),
    ing("Spinach", "Spinach", "Szpinak", "vegetables"),
    ing("Broccoli", "Broccoli", "Brokuły", "vegetables"),
    ing("Cauliflower", "Cauliflower", "Kalafior", "vegetables"),
    ing("Cabbage", "Cabbage", "Kapusta", "vegetables"),
    ing("Carrots", "Carrots", "Marchew", "vegetables"),
    ing("Peas", "Peas", "Groszek", "vegetables"),
    ing("Corn", "Corn", "Kukurydza", "vegetables"),
    ing("Asparagus", "Asparagus", "Szparagi", "vegetables"),
    ing("Cucumber", "Cucumber", "Ogórek", "vegetables"),
    ing("Lettuce", "Lettuce", "Sałata", "vegetables"),
    ing("Eggs", "Eggs", "Jajka", "dairy"),
    ing("Cheese", "Cheese", "Ser", "dairy"),
    ing("Milk", "Milk", "Mleko", "dairy"),
    ing("Yogurt", "Yogurt", "Jogurt", "dairy"),
    ing("Butter", "Butter", "Masło", "dairy"),
    ing("Cream", "Cream", "Śmietana", "dairy"),
    ing("Lentils", "Lentils", "Soczewica", "legumes"),
    ing("Chickpeas", "Chickpeas", "Ciecierzyca", "legumes"),
    ing("Beans", "Beans", "Fasola", "legumes"),
    ing("Black beans", "Black beans", "Czarna fasola", "legumes"),
    ing("Pinto beans", "Pinto beans", "Fasola pinto", "legumes"),
    ing("Apples", "Apples", "Jabłka", "fruits"),
    ing("Bananas", "Bananas", "Banany", "fruits"),
    ing("Berries", "Berries", "Jagody", "fruits"),
    ing("Lemons", "Lemons", "Cytryny", "fruits"),
    ing("Limes", "Limes", "Limonki", "fruits"),
    ing("Oranges", "Oranges", "Pomarańcze", "fruits"),
    ing("Pineapple", "Pineapple", "Ananas", "fruits"),
    ing("Almonds", "Almonds", "Migdały", "nuts"),
    ing("Walnuts", "Walnuts", "Orzechy włoskie", "nuts"),
    ing("Peanuts", "Peanuts", "Orzeszki ziemne", "nuts"),
    ing("Cashews", "Cashews", "Nerkowce", "nuts"),
    ing("Sunflower seeds", "Sunflower seeds", "Pestki słonecznika", "nuts"),
    ing("Chia seeds", "Chia seeds", "Nasiona chia", "nuts"),
    ing("Flaxseeds", "Flaxseeds", "Siemię lniane", "nuts"),
    ing("Basil", "Basil", "Bazylia", "herbs"),
    ing("Oregano", "Oregano", "Oregano", "herbs"),
    ing("Thyme", "Thyme", "Tymianek", "herbs"),
    ing("Rosemary", "Rosemary", "Rozmaryn", "herbs"),
    ing("Parsley", "Parsley", "Pietruszka", "herbs"),
    ing("Cilantro", "Cilantro", "Kolendra", "herbs"),
    ing("Ginger", "Ginger", "Imbir", "herbs"),
    ing("Cumin", "Cumin", "Kminek", "herbs"),
    ing("Cinnamon", "Cinnamon", "Cynamon", "herbs"),
];

/// Looks up the display label for a canonical `value` in one of the tables above.
pub fn label_for(
    table: &[LocalizedOption],
    value: &str,
    language: OutputLanguage,
) -> Option<&'static str> {
    table
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label.get(language))
}

/// Finds a common ingredient by its canonical value or by either label,
/// ignoring case.
pub fn find_ingredient(query: &str) -> Option<&'static LocalizedIngredient> {
    let query = query.trim().to_lowercase();
    COMMON_INGREDIENTS.iter().find(|ingredient| {
        ingredient.value.to_lowercase() == query
            || ingredient.label.en.to_lowercase() == query
            || ingredient.label.pl.to_lowercase() == query
    })
}

pub fn ingredients_in_category(category: &str) -> impl Iterator<Item = &'static LocalizedIngredient> + '_ {
    COMMON_INGREDIENTS
        .iter()
        .filter(move |ingredient| ingredient.category == category)
}

const CATALOG_SECTIONS: &[(Label, &[LocalizedOption])] = &[
    (Label { en: "Diet", pl: "Dieta" }, DIETS),
    (Label { en: "Preparation time", pl: "Czas przygotowania" }, PREP_TIMES),
    (Label { en: "Meal type", pl: "Rodzaj posiłku" }, MEAL_TYPES),
    (Label { en: "Cuisine", pl: "Kuchnia" }, CUISINES),
    (Label { en: "Dietary components", pl: "Składniki odżywcze" }, DIETARY_COMPONENTS),
];

/// Lists every option value with its label, followed by the ingredient
/// catalogue grouped by category.
pub fn render_catalog(language: OutputLanguage) -> String {
    let mut out = String::new();
    for (heading, table) in CATALOG_SECTIONS {
        out.push_str(&format!("{}:\n", heading.get(language)));
        for option in table.iter() {
            out.push_str(&format!("  {:<16}{}\n", option.value, option.label.get(language)));
        }
        out.push('\n');
    }
    for category in INGREDIENT_CATEGORIES {
        out.push_str(&format!("{}:\n", category.label.get(language)));
        for ingredient in ingredients_in_category(category.value) {
            out.push_str(&format!("  {:<16}{}\n", ingredient.value, ingredient.label.get(language)));
        }
        out.push('\n');
    }
    out
}
