//! # Space Planning Model
//!
//! Clean DTOs for the planning domain: spaces, the adjacency relation,
//! custom columns, and the project record that aggregates them.
//! These types cross every boundary: storage ↔ layout ↔ renderers ↔ user.
//!
//! Design rule: NO view state, NO storage handles, NO HTML here.
//! This module is pure data — no I/O, no state, no async.

pub mod space;
pub mod adjacency;
pub mod column;
pub mod project;

pub use space::{Space, SpaceId, Privacy};
pub use adjacency::{Strength, GlyphKind, PairKey, AdjacencyMap};
pub use column::{CustomColumn, ColumnType, FieldValue, TypedValue};
pub use project::{Project, DEFAULT_VISIBLE_COLUMNS};
