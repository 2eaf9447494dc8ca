//! Saved recipes and the key-value collaborator they live in.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access recipe store {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("recipe store contains invalid data: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecipe {
    pub id: String,
    pub name: String,
    pub content: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

#[async_trait]
pub trait RecipeStore: Send + Sync {
    async fn load(&self) -> Result<Vec<SavedRecipe>, StorageError>;
    async fn persist(&self, recipes: &[SavedRecipe]) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryRecipeStore {
    recipes: Mutex<Vec<SavedRecipe>>,
}

impl MemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeStore for MemoryRecipeStore {
    async fn load(&self) -> Result<Vec<SavedRecipe>, StorageError> {
        Ok(self.recipes.lock().await.clone())
    }

    async fn persist(&self, recipes: &[SavedRecipe]) -> Result<(), StorageError> {
        *self.recipes.lock().await = recipes.to_vec();
        Ok(())
    }
}

/// Stores the list as a JSON array in one file. A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct JsonFileRecipeStore {
    path: PathBuf,
}

impl JsonFileRecipeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl RecipeStore for JsonFileRecipeStore {
    async fn load(&self) -> Result<Vec<SavedRecipe>, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) if contents.trim().is_empty() => Ok(Vec::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    async fn persist(&self, recipes: &[SavedRecipe]) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(recipes)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| self.io_error(e))
    }
}

/// The saved-recipe list of one session, backed by an injected store.
pub struct SavedRecipes<S> {
    store: S,
    recipes: Vec<SavedRecipe>,
}

impl<S: RecipeStore> SavedRecipes<S> {
    pub async fn open(store: S) -> Result<Self, StorageError> {
        let recipes = store.load().await.map_err(|e| {
            error!(error = %e, "failed to load saved recipes");
            e
        })?;
        debug!(count = recipes.len(), "loaded saved recipes");
        Ok(Self { store, recipes })
    }

    pub fn recipes(&self) -> &[SavedRecipe] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&SavedRecipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub async fn reload(&mut self) -> Result<(), StorageError> {
        self.recipes = self.store.load().await?;
        Ok(())
    }

    fn next_id(&self, now_ms: i64) -> String {
        // ids are the creation time; bump past any id already taken in the same millisecond
        let mut candidate = now_ms;
        while self.recipes.iter().any(|r| r.id == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }

    /// The in-memory list only changes once the store accepted it.
    pub async fn save(&mut self, name: &str, content: &str) -> Result<SavedRecipe, StorageError> {
        let now_ms = Utc::now().timestamp_millis();
        let recipe = SavedRecipe {
            id: self.next_id(now_ms),
            name: name.to_string(),
            content: content.to_string(),
            created_at: now_ms,
        };

        let mut updated = self.recipes.clone();
        updated.push(recipe.clone());
        if let Err(e) = self.store.persist(&updated).await {
            error!(error = %e, name, "failed to save recipe");
            return Err(e);
        }
        self.recipes = updated;
        Ok(recipe)
    }

    pub async fn remove(&mut self, id: &str) -> Result<bool, StorageError> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        let updated: Vec<SavedRecipe> = self
            .recipes
            .iter()
            .filter(|recipe| recipe.id != id)
            .cloned()
            .collect();
        if let Err(e) = self.store.persist(&updated).await {
            error!(error = %e, id, "failed to remove recipe");
            return Err(e);
        }
        self.recipes = updated;
        Ok(true)
    }
}
