//! Operation result shapes.
//!
//! Each structural or query operation returns one of these alongside the
//! ordered `path` of node values it visited. The shapes serialize with
//! camelCase field names so the HTTP layer can emit them directly.

use serde::Serialize;

/// Comparison discipline for [`Bst::search`](crate::tree::Bst::search).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Report `found` only on an exact key match.
    Exact,
    /// On a dead end, additionally report a local lower-bound candidate
    /// (see [`Search::lower_bound`]).
    LowerBound,
}

/// Result of an insert.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Insertion<K> {
    /// `false` when the key was already present.
    pub inserted: bool,
    pub path: Vec<K>,
}

/// Result of a search.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Search<K> {
    pub found: bool,
    pub path: Vec<K>,
    /// The matched key, present on an exact hit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<K>,
    /// Lower-bound candidate reported on a [`SearchMode::LowerBound`]
    /// dead end. This is the value of the node where a left descent
    /// failed; a failed right descent yields `None` (no bound below the
    /// search point). It is a local candidate derived from the last
    /// comparison direction, not a tree-wide "smallest key ≥ target".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<K>,
}

/// Result of a remove. Removal of an absent key is a no-op but still
/// records the descent that failed to find it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Removal<K> {
    pub path: Vec<K>,
}

/// Result of a min/max descent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Extremum<K> {
    pub value: K,
    pub path: Vec<K>,
}

/// Result of a predecessor/successor query.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Neighbor<K> {
    pub found: bool,
    pub value: Option<K>,
    pub path: Vec<K>,
}

/// Result of an order-statistic select.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Selection<K> {
    pub found: bool,
    pub value: Option<K>,
    pub path: Vec<K>,
}
