//! # Storage Contract
//!
//! `KeyValueStore` is THE contract between the session and its persistence
//! substrate. The substrate is keyed string storage with browser-local-storage
//! semantics: no durability guarantee, writes can fail (quota), availability
//! may be asynchronous.
//!
//! ## Implementations
//!
//! | Store | Module | Description |
//! |-------|--------|-------------|
//! | `MemoryStore` | `memory` | In-memory map for testing/embedding |
//!
//! `ProjectStorage` layers the project-record semantics on top: a single
//! list of projects under one key, a current-project pointer under another,
//! and brand settings under a third.

pub mod memory;

use async_trait::async_trait;

use crate::export::BrandSettings;
use crate::interchange;
use crate::model::Project;
use crate::{Error, Result};

pub use memory::MemoryStore;

/// Key holding the JSON array of all saved projects.
pub const PROJECTS_KEY: &str = "adjacency-matrix-projects";
/// Key holding the id of the most recently saved project.
pub const CURRENT_PROJECT_KEY: &str = "adjacency-matrix-current";
/// Key holding the studio brand settings.
pub const BRAND_SETTINGS_KEY: &str = "brand-settings";

// ============================================================================
// KeyValueStore Trait
// ============================================================================

/// The universal persistence contract: keyed string storage.
///
/// Implementations must not be assumed durable or synchronous — a quota or
/// availability failure surfaces as `Error::Storage` and the in-memory
/// project remains authoritative.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value under a key. `None` if the key is unset.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value (upsert).
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an unset key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}

// ============================================================================
// ProjectStorage
// ============================================================================

/// Project-record persistence over any [`KeyValueStore`].
pub struct ProjectStorage<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ProjectStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store (for advanced use).
    pub fn store(&self) -> &S {
        &self.store
    }

    // ========================================================================
    // Projects
    // ========================================================================

    /// All saved projects.
    ///
    /// A corrupt stored list degrades to an empty one with a logged warning
    /// rather than an error — the next save rewrites it.
    pub async fn all_projects(&self) -> Result<Vec<Project>> {
        let Some(raw) = self.store.get(PROJECTS_KEY).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(projects) => Ok(projects),
            Err(e) => {
                tracing::warn!(error = %e, "stored project list is corrupt; starting empty");
                Ok(Vec::new())
            }
        }
    }

    /// Upsert a project into the stored list and mark it current.
    pub async fn save_project(&self, project: &Project) -> Result<()> {
        let mut projects = self.all_projects().await?;
        match projects.iter_mut().find(|p| p.id == project.id) {
            Some(existing) => *existing = project.clone(),
            None => projects.push(project.clone()),
        }
        let encoded = serde_json::to_string(&projects).map_err(|e| Error::Storage(e.to_string()))?;
        self.store.set(PROJECTS_KEY, &encoded).await?;
        self.store.set(CURRENT_PROJECT_KEY, &project.id).await?;
        Ok(())
    }

    pub async fn load_project(&self, id: &str) -> Result<Option<Project>> {
        Ok(self.all_projects().await?.into_iter().find(|p| p.id == id))
    }

    /// Remove a project from the stored list; clears the current pointer if
    /// it referenced the deleted project.
    pub async fn delete_project(&self, id: &str) -> Result<()> {
        let projects: Vec<Project> = self
            .all_projects()
            .await?
            .into_iter()
            .filter(|p| p.id != id)
            .collect();
        let encoded = serde_json::to_string(&projects).map_err(|e| Error::Storage(e.to_string()))?;
        self.store.set(PROJECTS_KEY, &encoded).await?;

        if self.current_project_id().await?.as_deref() == Some(id) {
            self.store.remove(CURRENT_PROJECT_KEY).await?;
        }
        Ok(())
    }

    pub async fn current_project_id(&self) -> Result<Option<String>> {
        self.store.get(CURRENT_PROJECT_KEY).await
    }

    // ========================================================================
    // Brand settings
    // ========================================================================

    /// Load brand settings, falling back to defaults when unset or corrupt.
    pub async fn load_brand_settings(&self) -> Result<BrandSettings> {
        let Some(raw) = self.store.get(BRAND_SETTINGS_KEY).await? else {
            return Ok(BrandSettings::default());
        };
        match serde_json::from_str(&raw) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!(error = %e, "stored brand settings are corrupt; using defaults");
                Ok(BrandSettings::default())
            }
        }
    }

    pub async fn save_brand_settings(&self, settings: &BrandSettings) -> Result<()> {
        let encoded =
            serde_json::to_string(settings).map_err(|e| Error::Storage(e.to_string()))?;
        self.store.set(BRAND_SETTINGS_KEY, &encoded).await
    }

    // ========================================================================
    // Import
    // ========================================================================

    /// Decode a project file and persist it. Rejection leaves storage (and
    /// the caller's current project) untouched.
    pub async fn import_project(&self, json: &str) -> Result<Project> {
        let project = interchange::decode_project(json)?;
        self.save_project(&project).await?;
        Ok(project)
    }
}
