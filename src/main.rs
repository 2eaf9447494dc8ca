use anyhow::{Context, Result};
use recipe_gen::api_connection::HttpRecipeClient;
use recipe_gen::cli::{parse_args, Command, GenerateArgs, SavedCommand};
use recipe_gen::config::GeneratorConfig;
use recipe_gen::generator::{BatchError, CancellationToken, RecipeGenerationService};
use recipe_gen::language::LanguagePreference;
use recipe_gen::localization::render_catalog;
use recipe_gen::recipe::Recipe;
use recipe_gen::recipe_parser::parse_recipe_sections;
use recipe_gen::storage::{JsonFileRecipeStore, SavedRecipes};
use tokio::fs;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_recipe(index: usize, recipe: &Recipe) {
    let sections = parse_recipe_sections(&recipe.content);
    println!("\n=== {}. {} ===", index + 1, recipe.name);
    if !sections.prep_time.is_empty() {
        println!("{}", sections.prep_time);
    }
    if sections.ingredients.is_empty() && sections.steps.is_empty() {
        println!("{}", recipe.content.trim());
        return;
    }
    println!("\nIngredients:");
    for ingredient in &sections.ingredients {
        println!("  - {ingredient}");
    }
    println!("\nSteps:");
    for (i, step) in sections.steps.iter().enumerate() {
        println!("  {}. {step}", i + 1);
    }
}

async fn run_generate(
    args: &GenerateArgs,
    config: &GeneratorConfig,
    service: &RecipeGenerationService<HttpRecipeClient>,
) -> Result<()> {
    let options = args.to_options();
    let cancel = CancellationToken::new();

    let ctrl_c_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_token.cancel();
        }
    });

    let (recipes, notices) = match service.generate_batch(&options, args.count, &cancel).await {
        Ok(outcome) => (outcome.recipes, outcome.notices),
        Err(BatchError::Cancelled { partial }) => {
            info!(accepted = partial.recipes.len(), "generation cancelled");
            (partial.recipes, partial.notices)
        }
        Err(e) => {
            error!(error = %e, "recipe generation failed");
            return Err(e).context("Failed to generate recipe. Please try again.");
        }
    };

    if let Some(notice) = notices.first() {
        eprintln!("\n{notice}");
    }
    for (index, recipe) in recipes.iter().enumerate() {
        print_recipe(index, recipe);
    }

    if args.save && !recipes.is_empty() {
        let store = JsonFileRecipeStore::new(config.store_path.clone());
        let mut saved = SavedRecipes::open(store)
            .await
            .context("Failed to load saved recipes")?;
        for recipe in &recipes {
            let entry = saved
                .save(&recipe.name, &recipe.content)
                .await
                .with_context(|| format!("Failed to save recipe '{}'", recipe.name))?;
            println!("Saved '{}' as {}", entry.name, entry.id);
        }
    }
    Ok(())
}

async fn run_saved(command: &SavedCommand, config: &GeneratorConfig) -> Result<()> {
    let store = JsonFileRecipeStore::new(config.store_path.clone());
    let mut saved = SavedRecipes::open(store)
        .await
        .with_context(|| format!("Failed to load saved recipes from '{}'", config.store_path.display()))?;

    match command {
        SavedCommand::List => {
            if saved.recipes().is_empty() {
                println!("No saved recipes.");
            }
            for recipe in saved.recipes() {
                let created = chrono::DateTime::from_timestamp_millis(recipe.created_at)
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default();
                println!("{}  {}  {}", recipe.id, created, recipe.name);
            }
        }
        SavedCommand::Show { id } => match saved.get(id) {
            Some(recipe) => println!("{}", recipe.content.trim()),
            None => anyhow::bail!("No saved recipe with id {id}"),
        },
        SavedCommand::Remove { id } => {
            if saved.remove(id).await.context("Failed to remove recipe")? {
                println!("Removed {id}");
            } else {
                anyhow::bail!("No saved recipe with id {id}");
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = parse_args();
    let mut config = GeneratorConfig::from_env().context("Invalid configuration")?;
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(store) = &cli.store {
        config.store_path = store.clone();
    }

    let client = HttpRecipeClient::from_config(&config).context("Failed to build HTTP client")?;
    info!(endpoint = client.endpoint(), "using recipe endpoint");
    let service = RecipeGenerationService::new(client)
        .with_max_duplicate_retries(config.max_duplicate_retries);

    match &cli.command {
        Command::Generate(args) => run_generate(args, &config, &service).await?,
        Command::Translate { recipe_file } => {
            let recipe = fs::read_to_string(recipe_file)
                .await
                .with_context(|| format!("Failed to read recipe file '{}'", recipe_file.display()))?;
            println!("{}", service.translate_recipe(&recipe).await.trim());
        }
        Command::Saved(command) => run_saved(command, &config).await?,
        Command::Options { polish } => {
            print!("{}", render_catalog(LanguagePreference::new(*polish).output_language()));
        }
    }

    Ok(())
}
