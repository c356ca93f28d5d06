//! Renderer-facing projection: 2-D layout, highlight flags, aggregates.
//!
//! The layout is a fixed-width recursive halving: the root sits at
//! ([`ROOT_X`], [`ROOT_Y`]) and each child is offset horizontally by
//! [`LEVEL_WIDTH`]` / 2^level` and vertically by [`LEVEL_HEIGHT`].
//! The projection is derived state — it never mutates the tree — and must
//! be recomputed after any mutating or highlighting operation.

use serde::Serialize;

use crate::tree::Bst;

/// Horizontal spread of the root's children; halves at every level below.
pub const LEVEL_WIDTH: f64 = 320.0;
/// Vertical distance between levels.
pub const LEVEL_HEIGHT: f64 = 70.0;
/// Root node position.
pub const ROOT_X: f64 = 500.0;
pub const ROOT_Y: f64 = 50.0;

/// One positioned node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VizNode<K> {
    pub id: K,
    pub value: K,
    pub x: f64,
    pub y: f64,
    /// True when the value is on the highlighted path or in the
    /// independently highlighted node set.
    pub highlighted: bool,
}

/// One parent→child edge. Endpoints are `"x,y"` coordinate strings, the
/// shape the renderer keys its line segments by.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VizEdge<K> {
    pub from: String,
    pub to: String,
    /// The child's value.
    pub to_val: K,
    /// True only when the child is on the highlighted path.
    pub highlighted: bool,
}

/// Renderer-ready snapshot of the tree and its highlight state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Visualization<K> {
    pub nodes: Vec<VizNode<K>>,
    pub edges: Vec<VizEdge<K>>,
    /// Node count.
    pub n: usize,
    /// Tree height, 0 for an empty tree.
    pub h: usize,
}

impl<K: Copy + PartialOrd> Bst<K> {
    /// Computes the projection from the current tree and highlight state.
    pub fn to_visualization(&self) -> Visualization<K> {
        let mut nodes = Vec::with_capacity(self.len());
        let mut edges = Vec::new();
        if let Some(root) = self.root {
            self.project(root, ROOT_X, ROOT_Y, 1, None, &mut nodes, &mut edges);
        }
        Visualization {
            nodes,
            edges,
            n: self.len(),
            h: self.height(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn project(
        &self,
        idx: u32,
        x: f64,
        y: f64,
        level: u32,
        parent: Option<(f64, f64)>,
        nodes: &mut Vec<VizNode<K>>,
        edges: &mut Vec<VizEdge<K>>,
    ) {
        let node = &self.arena[idx as usize];
        let (value, left, right) = (node.value, node.left, node.right);

        let on_path = self.highlighted_path.contains(&value);
        nodes.push(VizNode {
            id: value,
            value,
            x,
            y,
            highlighted: on_path || self.highlighted_nodes.contains(&value),
        });
        if let Some((px, py)) = parent {
            edges.push(VizEdge {
                from: format!("{px},{py}"),
                to: format!("{x},{y}"),
                to_val: value,
                highlighted: on_path,
            });
        }

        let spread = LEVEL_WIDTH / 2f64.powi(level as i32);
        if let Some(l) = left {
            self.project(l, x - spread, y + LEVEL_HEIGHT, level + 1, Some((x, y)), nodes, edges);
        }
        if let Some(r) = right {
            self.project(r, x + spread, y + LEVEL_HEIGHT, level + 1, Some((x, y)), nodes, edges);
        }
    }
}
