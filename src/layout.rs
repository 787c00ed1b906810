//! Triangular matrix layout.
//!
//! Given the ordered space list, produce the strict lower triangle: row `r`
//! (1 ≤ r < N) compares space `r` against each earlier space `c` (0 ≤ c < r).
//! Row 0 and the self-diagonal never render, so each unordered pair appears
//! exactly once and the cell count is `N*(N-1)/2`.
//!
//! Building the layout is a pure function of the space slice — no strength
//! lookups happen here. Renderers pair each cell's `key` with the adjacency
//! map at paint time.

use crate::model::{PairKey, Space, SpaceId};

/// One clickable/printable comparison cell.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixCell {
    /// Row space index into the original slice.
    pub row: usize,
    /// Column space index; always `< row`.
    pub col: usize,
    pub key: PairKey,
    /// True for the cell touching the (unrendered) diagonal, which carries
    /// the diagonal rule line in both renderers.
    pub diagonal: bool,
}

/// A rendered row: the row space plus its comparison cells.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRow {
    pub row: usize,
    pub cells: Vec<MatrixCell>,
}

/// The full triangular layout for an ordered space list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TriangularLayout {
    /// Rows for indices `1..N`. Empty when fewer than two spaces exist.
    pub rows: Vec<LayoutRow>,
    /// Column label indices `0..N-1` — the last space only ever appears as
    /// a row, the first only as a column.
    pub column_labels: Vec<usize>,
}

impl TriangularLayout {
    pub fn build(spaces: &[Space]) -> Self {
        let n = spaces.len();
        let mut rows = Vec::with_capacity(n.saturating_sub(1));

        for r in 1..n {
            let cells = (0..r)
                .map(|c| MatrixCell {
                    row: r,
                    col: c,
                    key: PairKey::new(&spaces[r].id, &spaces[c].id),
                    diagonal: c == r - 1,
                })
                .collect();
            rows.push(LayoutRow { row: r, cells });
        }

        Self {
            rows,
            column_labels: (0..n.saturating_sub(1)).collect(),
        }
    }

    /// Total comparison cells: `N*(N-1)/2`.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).sum()
    }

    /// True when there is nothing to draw and the caller should show an
    /// empty-state placeholder instead of a table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = &MatrixCell> {
        self.rows.iter().flat_map(|r| r.cells.iter())
    }
}

/// Iterate the `(row, col)` index pairs of the strict lower triangle without
/// materializing a layout.
pub fn pair_indices(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (1..n).flat_map(|r| (0..r).map(move |c| (r, c)))
}

/// The ids compared by a cell, in (row, col) order.
pub fn cell_ids<'a>(spaces: &'a [Space], cell: &MatrixCell) -> (&'a SpaceId, &'a SpaceId) {
    (&spaces[cell.row].id, &spaces[cell.col].id)
}
