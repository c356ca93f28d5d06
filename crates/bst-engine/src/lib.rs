//! Instrumented binary search tree engine.
//!
//! Every operation — insert, search (exact / lower-bound), remove,
//! min/max, predecessor/successor, k-th order-statistic select, and the
//! three classical traversals — records the exact sequence of node values
//! it visits (its *path*). The tree additionally projects into a
//! renderer-ready 2-D layout with per-node and per-edge highlight flags,
//! consumed by an external renderer.
//!
//! Instead of raw pointers, all child links are `Option<u32>` indices into
//! a `Vec`-backed arena owned by [`Bst`]. Slots vacated by a remove go
//! onto a free list and are handed back to later inserts.
//!
//! The engine is single-threaded and synchronous: one logical caller
//! issues one operation at a time, and every operation completes before
//! returning. Highlight state is presentation-only and is never read or
//! written by the structural operations.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`node`] | [`BstNode`] arena node |
//! | [`tree`] | [`Bst`]: mutation, search and neighbor queries, highlight state |
//! | [`traverse`] | in-/pre-/post-order walks and order-statistic select |
//! | [`viz`] | [`Visualization`] layout projection |
//! | [`scene`] | empty / random / example scene builders |

pub mod node;
pub mod outcome;
pub mod scene;
pub mod traverse;
pub mod tree;
pub mod viz;

pub use node::BstNode;
pub use outcome::{Extremum, Insertion, Neighbor, Removal, Search, SearchMode, Selection};
pub use scene::{EXAMPLE_KEYS, MAX_RANDOM_NODES, RANDOM_KEY_MAX, RANDOM_KEY_MIN};
pub use tree::Bst;
pub use viz::{Visualization, VizEdge, VizNode, LEVEL_HEIGHT, LEVEL_WIDTH, ROOT_X, ROOT_Y};
