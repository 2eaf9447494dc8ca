use recipe_gen::storage::{JsonFileRecipeStore, RecipeStore, SavedRecipes, StorageError};
use tempfile::tempdir;

#[tokio::test]
async fn test_missing_file_loads_as_empty() {
    let dir = tempdir().unwrap();
    let store = JsonFileRecipeStore::new(dir.path().join("saved_recipes.json"));
    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_saved_recipes_survive_reopening() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("saved_recipes.json");

    let mut saved = SavedRecipes::open(JsonFileRecipeStore::new(&path)).await.unwrap();
    let goulash = saved.save("Goulash", "<recipe_name>\nGoulash").await.unwrap();
    let bigos = saved.save("Bigos", "<recipe_name>\nBigos").await.unwrap();
    assert!(path.exists());

    let mut reopened = SavedRecipes::open(JsonFileRecipeStore::new(&path)).await.unwrap();
    assert_eq!(reopened.recipes(), &[goulash.clone(), bigos.clone()]);

    assert!(reopened.remove(&goulash.id).await.unwrap());
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"createdAt\""));
    assert!(!raw.contains("Goulash"));

    saved.reload().await.unwrap();
    assert_eq!(saved.recipes(), &[bigos]);
}

#[tokio::test]
async fn test_corrupt_file_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("saved_recipes.json");
    std::fs::write(&path, "{not json").unwrap();

    let result = SavedRecipes::open(JsonFileRecipeStore::new(&path)).await;
    assert!(matches!(result, Err(StorageError::Serialization(_))));
}

#[tokio::test]
async fn test_unusable_location_is_an_io_error() {
    let dir = tempdir().unwrap();
    // a regular file where the store expects a directory
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();
    let store = JsonFileRecipeStore::new(blocker.join("saved_recipes.json"));

    assert!(matches!(store.persist(&[]).await, Err(StorageError::Io { .. })));
    assert!(matches!(
        SavedRecipes::open(store).await,
        Err(StorageError::Io { .. })
    ));
}
