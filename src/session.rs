//! The working session: one open project bound to a storage substrate.
//!
//! Mirrors the single-user, single-writer interaction model: every mutation
//! runs to completion before the next event, persistence is explicit (or
//! fire-and-forget via `autosave_tick`), and an unsaved mutation lost at
//! process end is an accepted limitation, not a defect.

use std::io::Write;

use crate::export::{self, BrandSettings, ExportSettings};
use crate::interchange;
use crate::model::{Project, SpaceId, Strength};
use crate::storage::{KeyValueStore, ProjectStorage};
use crate::{Error, Result};

/// The primary entry point. A `Session` wraps a storage substrate and owns
/// the project currently being edited.
pub struct Session<S: KeyValueStore> {
    storage: ProjectStorage<S>,
    project: Project,
    brand: BrandSettings,
}

impl<S: KeyValueStore> Session<S> {
    /// Start with a fresh untitled project.
    pub fn new(store: S) -> Self {
        Self {
            storage: ProjectStorage::new(store),
            project: Project::new("Untitled Project"),
            brand: BrandSettings::default(),
        }
    }

    /// Resume the current project from storage if one is recorded, else
    /// start fresh. Brand settings load alongside.
    pub async fn open(store: S) -> Result<Self> {
        let storage = ProjectStorage::new(store);
        let project = match storage.current_project_id().await? {
            Some(id) => storage
                .load_project(&id)
                .await?
                .unwrap_or_else(|| Project::new("Untitled Project")),
            None => Project::new("Untitled Project"),
        };
        let brand = storage.load_brand_settings().await?;
        Ok(Self { storage, project, brand })
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn project_mut(&mut self) -> &mut Project {
        &mut self.project
    }

    pub fn brand_settings(&self) -> &BrandSettings {
        &self.brand
    }

    pub fn storage(&self) -> &ProjectStorage<S> {
        &self.storage
    }

    // ========================================================================
    // Editing
    // ========================================================================

    pub fn rename_project(&mut self, name: impl Into<String>) {
        self.project.rename(name);
    }

    pub fn add_space(&mut self) -> SpaceId {
        self.project.add_space()
    }

    pub fn delete_space(&mut self, id: &SpaceId) -> bool {
        self.project.remove_space(id)
    }

    pub fn cycle_adjacency(&mut self, a: &SpaceId, b: &SpaceId) -> Option<Strength> {
        self.project.cycle_adjacency(a, b)
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Persist the working project. Storage failures surface to the caller;
    /// the in-memory project stays authoritative either way.
    pub async fn save(&self) -> Result<()> {
        self.storage.save_project(&self.project).await
    }

    /// Replace the working project with a stored one.
    pub async fn load(&mut self, id: &str) -> Result<()> {
        let project = self
            .storage
            .load_project(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("project {id}")))?;
        self.project = project;
        Ok(())
    }

    /// Import a project file: decode, persist, adopt. A malformed file is
    /// rejected before anything changes.
    pub async fn import_json(&mut self, json: &str) -> Result<()> {
        self.project = self.storage.import_project(json).await?;
        Ok(())
    }

    /// The shareable JSON form of the working project.
    pub fn export_json(&self) -> Result<String> {
        interchange::encode_project_pretty(&self.project)
    }

    pub async fn save_brand_settings(&mut self, settings: BrandSettings) -> Result<()> {
        self.storage.save_brand_settings(&settings).await?;
        self.brand = settings;
        Ok(())
    }

    /// Periodic autosave hook, fire-and-forget: saves only when the project
    /// has at least one space, and never reports failure — the external
    /// timer just calls it again next interval.
    pub async fn autosave_tick(&self) {
        if self.project.spaces.is_empty() {
            return;
        }
        if let Err(e) = self.save().await {
            tracing::warn!(error = %e, project = %self.project.id, "autosave failed");
        }
    }

    // ========================================================================
    // Printing
    // ========================================================================

    /// Render the working project as a printable document.
    pub fn write_print_document(
        &self,
        settings: &ExportSettings,
        writer: &mut dyn Write,
    ) -> Result<()> {
        export::write_print_document(&self.project, settings, &self.brand, writer)
    }
}
