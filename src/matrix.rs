//! Interactive matrix view state.
//!
//! Hover and click handling for the on-screen triangular matrix. All state
//! here is ephemeral presentation state — it is never persisted and never
//! merged into the project record.

use crate::model::{GlyphKind, Project, SpaceId, Strength};

/// The currently hovered cell, identified by the two spaces it compares.
#[derive(Debug, Clone, PartialEq)]
pub struct HoveredPair {
    pub row_id: SpaceId,
    pub col_id: SpaceId,
}

/// One entry in the on-screen legend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry {
    pub strength: Strength,
    /// How a renderer should draw the swatch next to the label.
    pub glyph: GlyphKind,
    pub label: &'static str,
    pub symbol: &'static str,
    pub color: &'static str,
}

/// View-layer state for the interactive adjacency matrix.
#[derive(Debug, Clone, Default)]
pub struct MatrixView {
    hover: Option<HoveredPair>,
}

impl MatrixView {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Hover
    // ========================================================================

    pub fn hover_cell(&mut self, row_id: SpaceId, col_id: SpaceId) {
        self.hover = Some(HoveredPair { row_id, col_id });
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    pub fn hovered(&self) -> Option<&HoveredPair> {
        self.hover.as_ref()
    }

    /// A row or column label highlights when it names either end of the
    /// hovered pair.
    pub fn is_label_highlighted(&self, id: &SpaceId) -> bool {
        self.hover
            .as_ref()
            .is_some_and(|h| h.row_id == *id || h.col_id == *id)
    }

    /// Whether the cell comparing these two spaces is hovered, regardless of
    /// which one the pointer entered as the row.
    pub fn is_cell_hovered(&self, a: &SpaceId, b: &SpaceId) -> bool {
        self.hover.as_ref().is_some_and(|h| {
            (h.row_id == *a && h.col_id == *b) || (h.row_id == *b && h.col_id == *a)
        })
    }

    // ========================================================================
    // Click
    // ========================================================================

    /// The sole interactive mutation path: one click advances the pair
    /// exactly one step through the fixed cycle. Returns the new strength.
    pub fn click(&self, project: &mut Project, row_id: &SpaceId, col_id: &SpaceId) -> Option<Strength> {
        project.cycle_adjacency(row_id, col_id)
    }

    // ========================================================================
    // Legend
    // ========================================================================

    /// The on-screen legend: the three interactive strengths. `Avoid` and
    /// the none state have no visual treatment and are omitted.
    pub fn legend() -> Vec<LegendEntry> {
        [Strength::Required, Strength::Preferred, Strength::Neutral]
            .into_iter()
            .map(|s| LegendEntry {
                strength: s,
                glyph: s.glyph(),
                label: s.display_label(),
                symbol: s.symbol(),
                color: s.color(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_highlights_both_labels() {
        let mut view = MatrixView::new();
        let (a, b, c) = (
            SpaceId::from("aaa"),
            SpaceId::from("bbb"),
            SpaceId::from("ccc"),
        );
        view.hover_cell(a.clone(), b.clone());
        assert!(view.is_label_highlighted(&a));
        assert!(view.is_label_highlighted(&b));
        assert!(!view.is_label_highlighted(&c));

        view.clear_hover();
        assert!(!view.is_label_highlighted(&a));
    }

    #[test]
    fn test_cell_hover_is_orientation_insensitive() {
        let mut view = MatrixView::new();
        let (a, b) = (SpaceId::from("aaa"), SpaceId::from("bbb"));
        view.hover_cell(a.clone(), b.clone());
        assert!(view.is_cell_hovered(&a, &b));
        assert!(view.is_cell_hovered(&b, &a));
    }

    #[test]
    fn test_click_advances_one_step() {
        let view = MatrixView::new();
        let mut project = Project::new("Test");
        let a = project.add_space();
        let b = project.add_space();

        assert_eq!(view.click(&mut project, &b, &a), Some(Strength::Required));
        assert_eq!(project.adjacency(&a, &b), Some(Strength::Required));
    }

    #[test]
    fn test_legend_excludes_avoid_and_none() {
        let legend = MatrixView::legend();
        assert_eq!(legend.len(), 3);
        assert!(legend.iter().all(|e| e.strength != Strength::Avoid));
        assert_eq!(legend[0].label, "Primary Adjacency");
    }

    #[test]
    fn test_legend_glyphs_match_strengths() {
        let glyphs: Vec<_> = MatrixView::legend().iter().map(|e| e.glyph).collect();
        assert_eq!(
            glyphs,
            vec![GlyphKind::Filled, GlyphKind::Outlined, GlyphKind::Dash]
        );
    }
}
