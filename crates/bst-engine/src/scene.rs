//! Scene builders: empty, random, and the fixed example tree.

use rand::Rng;

use crate::tree::Bst;
use crate::viz::Visualization;

/// Insert order for the example scene, a reasonably balanced 22-node tree.
pub const EXAMPLE_KEYS: [i64; 22] = [
    58, 23, 77, 11, 41, 63, 83, 2, 12, 28, 54, 59, 69, 79, 8, 21, 39, 55, 62, 72, 80, 91,
];

/// Inclusive bounds for randomly drawn keys.
pub const RANDOM_KEY_MIN: i64 = -50;
pub const RANDOM_KEY_MAX: i64 = 149;

/// Largest node count [`Bst::create_random`] will produce.
pub const MAX_RANDOM_NODES: i64 = 50;

impl Bst<i64> {
    /// Clears the tree and returns the (empty) projection.
    pub fn create_empty(&mut self) -> Visualization<i64> {
        self.clear();
        self.to_visualization()
    }

    /// Clears the tree, inserts `n` distinct keys drawn uniformly from
    /// [`RANDOM_KEY_MIN`]`..=`[`RANDOM_KEY_MAX`] (with `n` clamped to
    /// `[1, 50]`), and returns the projection. Individual insert
    /// paths are discarded. Uses the thread-local RNG; see
    /// [`create_random_with`](Bst::create_random_with) for seeded runs.
    pub fn create_random(&mut self, n: i64) -> Visualization<i64> {
        self.create_random_with(n, &mut rand::thread_rng())
    }

    /// [`create_random`](Bst::create_random) with a caller-supplied RNG,
    /// so a seeded generator reproduces the same scene. Collisions are
    /// redrawn until `n` distinct keys have landed.
    pub fn create_random_with<R: Rng>(&mut self, n: i64, rng: &mut R) -> Visualization<i64> {
        self.clear();
        let count = n.clamp(1, MAX_RANDOM_NODES);
        let mut drawn = 0;
        while drawn < count {
            let key = rng.gen_range(RANDOM_KEY_MIN..=RANDOM_KEY_MAX);
            if self.insert(key).inserted {
                drawn += 1;
            }
        }
        self.to_visualization()
    }

    /// Clears the tree, seeds it with [`EXAMPLE_KEYS`] in order, and
    /// returns the projection.
    pub fn create_example(&mut self) -> Visualization<i64> {
        self.clear();
        for key in EXAMPLE_KEYS {
            self.insert(key);
        }
        self.to_visualization()
    }
}
