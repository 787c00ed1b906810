//! # spaceplan — Adjacency Matrix Space Planning
//!
//! The data core of an interior-design programming tool: named spaces with
//! planning criteria, pairwise adjacency preferences between them, and the
//! triangular matrix that renders each unordered pair exactly once.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `KeyValueStore` is the contract between the session and
//!    whatever persistence substrate hosts it (browser local storage, a file,
//!    an in-memory map for tests)
//! 2. **Clean DTOs**: `Space`, `Strength`, `PairKey`, `Project` cross all
//!    boundaries
//! 3. **Layout owns nothing**: spaces → triangular cells is a pure function
//! 4. **View state stays in the view**: hover and selection never touch the
//!    project record
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spaceplan::{Session, storage::MemoryStore};
//!
//! # async fn example() -> spaceplan::Result<()> {
//! let mut session = Session::new(MemoryStore::new());
//!
//! let kitchen = session.add_space();
//! let dining = session.add_space();
//!
//! // One click on the matrix cell: none → required
//! session.cycle_adjacency(&kitchen, &dining);
//!
//! session.save().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Storage Substrates
//!
//! | Store | Module | Description |
//! |-------|--------|-------------|
//! | Memory | `storage::memory` | In-memory map for testing/embedding |
//! | (yours) | — | Implement `KeyValueStore` over any keyed string store |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod layout;
pub mod matrix;
pub mod export;
pub mod interchange;
pub mod storage;
pub mod session;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    Space, SpaceId, Privacy,
    Strength, GlyphKind, PairKey, AdjacencyMap,
    CustomColumn, ColumnType, FieldValue, TypedValue,
    Project, DEFAULT_VISIBLE_COLUMNS,
};

// ============================================================================
// Re-exports: Layout + views
// ============================================================================

pub use layout::{TriangularLayout, LayoutRow, MatrixCell};
pub use matrix::{MatrixView, LegendEntry};

// ============================================================================
// Re-exports: Export + storage
// ============================================================================

pub use export::{ExportSettings, Orientation, PaperSize, BrandSettings};
pub use storage::{KeyValueStore, ProjectStorage};
pub use session::Session;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file did not parse, or lacked the required top-level fields.
    #[error("Invalid project file: {0}")]
    InvalidProject(String),

    /// The persistence substrate rejected a read or write (e.g. quota).
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
