use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::generator::MAX_BATCH_SIZE;
use crate::language::LanguagePreference;
use crate::localization::find_ingredient;
use crate::recipe::{ComponentPreference, RecipeOptions};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Recipe endpoint URL (overrides RECIPE_API_ENDPOINT)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Saved recipes file (overrides RECIPE_STORE_PATH)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate one or more recipes
    Generate(GenerateArgs),
    /// Translate an English recipe file into Polish
    Translate {
        /// Path to the recipe text file
        recipe_file: PathBuf,
    },
    /// Manage saved recipes
    #[command(subcommand)]
    Saved(SavedCommand),
    /// List the accepted option values and common ingredients
    Options {
        /// Show labels in Polish
        #[arg(long)]
        polish: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SavedCommand {
    /// List saved recipes
    List,
    /// Print one saved recipe
    Show { id: String },
    /// Remove a saved recipe
    Remove { id: String },
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Diet (vegetarian, vegan, meat, low_gi or a Polish label)
    #[arg(long)]
    pub diet: Option<String>,

    /// Preparation time (any, quick, medium, long)
    #[arg(long)]
    pub prep_time: Option<String>,

    /// Ingredient to use; repeat for several
    #[arg(short, long = "ingredient")]
    pub ingredients: Vec<String>,

    /// Only use the given ingredients
    #[arg(long)]
    pub only_selected: bool,

    /// Meal type (breakfast, lunch, dinner, snack)
    #[arg(long)]
    pub meal_type: Option<String>,

    /// Cuisine (italian, polish, mexican, asian, american, french)
    #[arg(long)]
    pub cuisine: Option<String>,

    /// Nutrient component as id=include[:grams], id=limit[:grams] or id=exclude
    #[arg(long = "component", value_parser = parse_component)]
    pub components: Vec<(String, ComponentPreference)>,

    /// Variation seed
    #[arg(long)]
    pub seed: Option<u32>,

    /// Number of recipes to generate (1-7)
    #[arg(
        short,
        long,
        default_value_t = 1,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_BATCH_SIZE as u64)
    )]
    pub count: usize,

    /// Write the recipes in Polish
    #[arg(long)]
    pub polish: bool,

    /// Save every generated recipe
    #[arg(long)]
    pub save: bool,
}

impl GenerateArgs {
    pub fn to_options(&self) -> RecipeOptions {
        RecipeOptions {
            diet: self.diet.clone(),
            prep_time: self.prep_time.clone(),
            ingredients: self.ingredients.iter().map(|i| canonical_ingredient(i)).collect(),
            display_language: LanguagePreference::new(self.polish).output_language(),
            meal_type: self.meal_type.clone(),
            cuisine: self.cuisine.clone(),
            use_only_selected: self.only_selected,
            dietary_components: self.components.iter().cloned().collect(),
            random_seed: self.seed,
        }
    }
}

// Known ingredients are sent by canonical value whichever label was typed.
fn canonical_ingredient(raw: &str) -> String {
    match find_ingredient(raw) {
        Some(ingredient) => ingredient.value.to_string(),
        None => raw.trim().to_string(),
    }
}

/// Parses `id=preference[:grams]`.
pub fn parse_component(raw: &str) -> Result<(String, ComponentPreference), String> {
    let (id, spec) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected id=preference, got '{raw}'"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing component id in '{raw}'"));
    }

    let (preference, amount) = match spec.split_once(':') {
        Some((preference, grams)) => {
            let grams: u32 = grams
                .trim()
                .parse()
                .map_err(|e| format!("invalid amount '{grams}': {e}"))?;
            (preference.trim(), Some(grams))
        }
        None => (spec.trim(), None),
    };

    let preference = match (preference.to_lowercase().as_str(), amount) {
        ("include", amount) => ComponentPreference::Include { amount },
        ("limit", amount) => ComponentPreference::Limit { amount },
        ("exclude", None) => ComponentPreference::Exclude,
        ("default", None) => ComponentPreference::Default,
        ("exclude" | "default", Some(_)) => {
            return Err(format!("'{preference}' does not take an amount"));
        }
        (other, _) => return Err(format!("unknown preference '{other}'")),
    };

    Ok((id.to_lowercase(), preference))
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::OutputLanguage;

    #[test]
    fn component_arguments() {
        assert_eq!(
            parse_component("sugars=limit:25").unwrap(),
            ("sugars".to_string(), ComponentPreference::Limit { amount: Some(25) })
        );
        assert_eq!(
            parse_component("Proteins=include").unwrap(),
            ("proteins".to_string(), ComponentPreference::Include { amount: None })
        );
        assert_eq!(
            parse_component("sodium=exclude").unwrap(),
            ("sodium".to_string(), ComponentPreference::Exclude)
        );
        assert!(parse_component("sodium=exclude:5").is_err());
        assert!(parse_component("sodium").is_err());
        assert!(parse_component("fats=maybe").is_err());
        assert!(parse_component("fats=limit:lots").is_err());
    }

    #[test]
    fn generate_arguments_become_options() {
        let cli = Cli::try_parse_from([
            "recipe_gen",
            "generate",
            "--diet",
            "wegańskie",
            "-i",
            "Rice",
            "-i",
            "łosoś",
            "-i",
            "Dragonfruit",
            "--only-selected",
            "--component",
            "sugars=limit:20",
            "--count",
            "3",
            "--polish",
            "--seed",
            "77",
        ])
        .unwrap();

        let Command::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(args.count, 3);
        let options = args.to_options();
        assert_eq!(options.diet.as_deref(), Some("wegańskie"));
        assert_eq!(options.ingredients, vec!["Rice", "Salmon", "Dragonfruit"]);
        assert!(options.use_only_selected);
        assert_eq!(options.display_language, OutputLanguage::Polish);
        assert_eq!(options.random_seed, Some(77));
        assert_eq!(
            options.dietary_components.get("sugars"),
            Some(&ComponentPreference::Limit { amount: Some(20) })
        );
    }

    #[test]
    fn count_outside_batch_limits_is_rejected() {
        for count in ["0", "8"] {
            assert!(Cli::try_parse_from(["recipe_gen", "generate", "--count", count]).is_err());
        }
        let cli = Cli::try_parse_from(["recipe_gen", "generate", "-c", "7"]).unwrap();
        assert!(matches!(cli.command, Command::Generate(ref args) if args.count == 7));
    }

    #[test]
    fn saved_subcommands() {
        let cli = Cli::try_parse_from(["recipe_gen", "--store", "/tmp/x.json", "saved", "remove", "123"]).unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/x.json")));
        assert!(matches!(cli.command, Command::Saved(SavedCommand::Remove { ref id }) if id == "123"));
    }
}
