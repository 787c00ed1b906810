//! The adjacency relation: an undirected, sparse, irreflexive mapping from
//! unordered pairs of space ids to a preference strength.
//!
//! "None" is the absence of an entry — the map only ever stores non-null
//! strengths, so an untouched pair costs nothing and a cleared pair leaves
//! no tombstone behind.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::SpaceId;

// ============================================================================
// Strength
// ============================================================================

/// Desired physical-proximity relationship between two spaces.
///
/// `Avoid` is a legacy value: it round-trips through project files and
/// renders as a blank glyph, but the interactive cycle never produces it
/// and the on-screen legend omits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Required,
    Preferred,
    Neutral,
    Avoid,
}

/// How a strength draws in a matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphKind {
    Filled,
    Outlined,
    Dash,
    Blank,
}

impl Strength {
    /// One step through the interactive cycle
    /// `none → required → preferred → neutral → none`.
    ///
    /// `Avoid` is outside the cycle and advances to none, so a click on a
    /// legacy cell clears it rather than jumping somewhere surprising.
    pub fn cycle_next(current: Option<Strength>) -> Option<Strength> {
        match current {
            None => Some(Strength::Required),
            Some(Strength::Required) => Some(Strength::Preferred),
            Some(Strength::Preferred) => Some(Strength::Neutral),
            Some(Strength::Neutral) => None,
            Some(Strength::Avoid) => None,
        }
    }

    pub fn glyph(self) -> GlyphKind {
        match self {
            Strength::Required => GlyphKind::Filled,
            Strength::Preferred => GlyphKind::Outlined,
            Strength::Neutral => GlyphKind::Dash,
            Strength::Avoid => GlyphKind::Blank,
        }
    }

    /// The print glyph character.
    pub fn symbol(self) -> &'static str {
        match self {
            Strength::Required => "●",
            Strength::Preferred => "○",
            Strength::Neutral => "—",
            Strength::Avoid => "",
        }
    }

    /// Human label used in legends and tooltips.
    pub fn display_label(self) -> &'static str {
        match self {
            Strength::Required => "Primary Adjacency",
            Strength::Preferred => "Secondary Adjacency",
            Strength::Neutral => "No Direct Connection",
            Strength::Avoid => "None",
        }
    }

    /// Ink color for the glyph.
    pub fn color(self) -> &'static str {
        match self {
            Strength::Required | Strength::Preferred => "#1e3a5f",
            Strength::Neutral => "#64748b",
            Strength::Avoid => "transparent",
        }
    }
}

// ============================================================================
// PairKey — the canonical unordered-pair codec
// ============================================================================

/// Canonical string key for an unordered pair of space ids.
///
/// The two ids are sorted lexicographically and joined with `-`; generated
/// ids are simple-form UUIDs, so for them the separator cannot occur inside
/// either half and `decode` is exact. Imported files may carry hyphenated
/// legacy ids; lookups still work (the whole strings sort and join the same
/// way), and [`references`](Self::references) handles them structurally.
///
/// Invariants: `PairKey::new(a, b) == PairKey::new(b, a)`, and `a != b`
/// (the layout never generates a self-pair).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairKey(String);

impl PairKey {
    pub fn new(a: &SpaceId, b: &SpaceId) -> Self {
        debug_assert_ne!(a, b, "self-adjacency has no key");
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        Self(format!("{}-{}", lo.as_str(), hi.as_str()))
    }

    /// Split back into the two ids. Returns `None` for keys whose halves
    /// contain the separator themselves — files written by the web client
    /// use hyphenated UUIDs, so their keys are ambiguous to split.
    pub fn decode(&self) -> Option<(SpaceId, SpaceId)> {
        let (lo, hi) = self.0.split_once('-')?;
        if lo.is_empty() || hi.is_empty() || hi.contains('-') {
            return None;
        }
        Some((SpaceId::from(lo), SpaceId::from(hi)))
    }

    /// Whether either half of the key is the given id.
    ///
    /// Matches structurally rather than through [`decode`](Self::decode):
    /// with hyphenated legacy ids the id sits before the first separator,
    /// after the last, or between two of them, and cascade-delete must find
    /// it in all three positions.
    pub fn references(&self, id: &SpaceId) -> bool {
        let key = self.0.as_str();
        key.starts_with(&format!("{id}-"))
            || key.ends_with(&format!("-{id}"))
            || key.contains(&format!("-{id}-"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PairKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// AdjacencyMap — the relation engine
// ============================================================================

/// Sparse symmetric relation over space ids.
///
/// Serializes as a plain JSON object keyed by pair-key strings, which is the
/// interchange shape of the `adjacencies` field in project files.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyMap(HashMap<PairKey, Strength>);

impl AdjacencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current strength for the pair. Absence means none.
    pub fn get(&self, a: &SpaceId, b: &SpaceId) -> Option<Strength> {
        self.0.get(&PairKey::new(a, b)).copied()
    }

    /// Explicit set. `None` removes the entry — no null marker is stored.
    pub fn set(&mut self, a: &SpaceId, b: &SpaceId, strength: Option<Strength>) {
        let key = PairKey::new(a, b);
        match strength {
            Some(s) => {
                self.0.insert(key, s);
            }
            None => {
                self.0.remove(&key);
            }
        }
    }

    /// Advance the pair one step through the interactive cycle and commit
    /// the result. Returns the new strength.
    pub fn cycle_next(&mut self, a: &SpaceId, b: &SpaceId) -> Option<Strength> {
        let next = Strength::cycle_next(self.get(a, b));
        self.set(a, b, next);
        next
    }

    /// Remove every entry whose key references the given id. Called when a
    /// space is deleted, before the space leaves the entity list.
    pub fn purge(&mut self, id: &SpaceId) {
        self.0.retain(|key, _| !key.references(id));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PairKey, &Strength)> {
        self.0.iter()
    }
}
