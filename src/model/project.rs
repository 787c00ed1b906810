//! The project record: entity list + adjacency map + column schema + metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AdjacencyMap, CustomColumn, Space, SpaceId, Strength};

/// Default criteria columns shown for every project, in display order.
pub const DEFAULT_VISIBLE_COLUMNS: [&str; 5] =
    ["daylight", "plumbing", "privacy", "equipment", "notes"];

fn default_visible_columns() -> Vec<String> {
    DEFAULT_VISIBLE_COLUMNS.iter().map(|s| s.to_string()).collect()
}

fn default_project_name() -> String {
    "Untitled Project".to_string()
}

/// A complete planning project.
///
/// The space list order is display order and drives the triangular layout
/// indices. Every mutation path that touches spaces keeps the adjacency map
/// consistent: no entry may reference an id absent from `spaces`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    /// Files from older exports may lack a name.
    #[serde(default = "default_project_name")]
    pub name: String,
    pub spaces: Vec<Space>,
    pub adjacencies: AdjacencyMap,
    #[serde(default)]
    pub custom_columns: Vec<CustomColumn>,
    /// Which default columns to show. Older files omit this; the serde
    /// default backfills all five.
    #[serde(default = "default_visible_columns")]
    pub visible_default_columns: Vec<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().simple().to_string(),
            name: name.into(),
            spaces: Vec::new(),
            adjacencies: AdjacencyMap::new(),
            custom_columns: Vec::new(),
            visible_default_columns: default_visible_columns(),
            created_at: now,
            updated_at: now,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    // ========================================================================
    // Spaces
    // ========================================================================

    /// Append a new space named `Space N+1` with default criteria.
    pub fn add_space(&mut self) -> SpaceId {
        let space = Space::new(format!("Space {}", self.spaces.len() + 1));
        let id = space.id.clone();
        self.spaces.push(space);
        self.touch();
        id
    }

    pub fn space(&self, id: &SpaceId) -> Option<&Space> {
        self.spaces.iter().find(|s| s.id == *id)
    }

    /// Mutable access for partial field edits. Handing out the reference is
    /// the edit, so `updated_at` bumps only when the space exists.
    pub fn space_mut(&mut self, id: &SpaceId) -> Option<&mut Space> {
        if self.space(id).is_some() {
            self.touch();
        }
        self.spaces.iter_mut().find(|s| s.id == *id)
    }

    /// Delete a space and cascade-delete its adjacency entries.
    ///
    /// The purge happens before the space leaves the list, so no reader can
    /// observe a relation entry dangling off a missing space.
    pub fn remove_space(&mut self, id: &SpaceId) -> bool {
        if self.space(id).is_none() {
            return false;
        }
        self.adjacencies.purge(id);
        self.spaces.retain(|s| s.id != *id);
        self.touch();
        true
    }

    // ========================================================================
    // Adjacency
    // ========================================================================

    pub fn adjacency(&self, a: &SpaceId, b: &SpaceId) -> Option<Strength> {
        self.adjacencies.get(a, b)
    }

    pub fn set_adjacency(&mut self, a: &SpaceId, b: &SpaceId, strength: Option<Strength>) {
        self.adjacencies.set(a, b, strength);
        self.touch();
    }

    /// One click on a matrix cell.
    pub fn cycle_adjacency(&mut self, a: &SpaceId, b: &SpaceId) -> Option<Strength> {
        let next = self.adjacencies.cycle_next(a, b);
        self.touch();
        next
    }

    // ========================================================================
    // Custom columns
    // ========================================================================

    pub fn add_custom_column(&mut self, column: CustomColumn) {
        self.custom_columns.push(column);
        self.touch();
    }

    /// Remove a column definition and strip its values from every space.
    pub fn remove_custom_column(&mut self, column_id: &str) -> bool {
        let before = self.custom_columns.len();
        self.custom_columns.retain(|c| c.id != column_id);
        if self.custom_columns.len() == before {
            return false;
        }
        for space in &mut self.spaces {
            space.custom_fields.remove(column_id);
        }
        self.touch();
        true
    }

    // ========================================================================
    // Program totals
    // ========================================================================

    /// Sum of planned areas across all spaces; absent area counts as zero.
    pub fn total_planned_area(&self) -> f64 {
        self.spaces.iter().filter_map(|s| s.planned_area).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColumnType;

    #[test]
    fn test_add_space_names_sequentially() {
        let mut project = Project::new("Test");
        project.add_space();
        project.add_space();
        assert_eq!(project.spaces[0].name, "Space 1");
        assert_eq!(project.spaces[1].name, "Space 2");
    }

    #[test]
    fn test_remove_space_cascades_adjacencies() {
        let mut project = Project::new("Test");
        let a = project.add_space();
        let b = project.add_space();
        project.set_adjacency(&a, &b, Some(Strength::Required));

        assert!(project.remove_space(&a));

        assert_eq!(project.spaces.len(), 1);
        assert_eq!(project.spaces[0].id, b);
        assert!(project.adjacencies.is_empty());
    }

    #[test]
    fn test_space_mut_miss_leaves_updated_at_alone() {
        let mut project = Project::new("Test");
        project.add_space();
        let before = project.updated_at;
        assert!(project.space_mut(&SpaceId::from("nope")).is_none());
        assert_eq!(project.updated_at, before);
    }

    #[test]
    fn test_remove_missing_space_is_noop() {
        let mut project = Project::new("Test");
        project.add_space();
        assert!(!project.remove_space(&SpaceId::from("nope")));
        assert_eq!(project.spaces.len(), 1);
    }

    #[test]
    fn test_total_area_treats_absent_as_zero() {
        let mut project = Project::new("Test");
        let a = project.add_space();
        let b = project.add_space();
        project.add_space(); // no area
        project.space_mut(&a).unwrap().planned_area = Some(120.0);
        project.space_mut(&b).unwrap().planned_area = Some(230.0);
        assert_eq!(project.total_planned_area(), 350.0);
    }

    #[test]
    fn test_remove_column_strips_values() {
        let mut project = Project::new("Test");
        let col = CustomColumn::new("Finish", ColumnType::Text);
        let col_id = col.id.clone();
        project.add_custom_column(col);

        let a = project.add_space();
        project
            .space_mut(&a)
            .unwrap()
            .custom_fields
            .insert(col_id.clone(), "tile".into());

        assert!(project.remove_custom_column(&col_id));
        assert!(project.custom_columns.is_empty());
        assert!(project.space(&a).unwrap().custom_fields.is_empty());
    }

    #[test]
    fn test_older_files_backfill_visible_columns() {
        let json = serde_json::json!({
            "id": "p1",
            "name": "Loft",
            "spaces": [],
            "adjacencies": {},
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z",
        });
        let project: Project = serde_json::from_value(json).unwrap();
        assert_eq!(project.visible_default_columns, default_visible_columns());
    }
}
