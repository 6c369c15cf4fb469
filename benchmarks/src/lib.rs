//! Shared helpers for forage benchmark suites.

use forage_harness::worlds::maze::{builtin_layout, MazeWorld};
use forage_kernel::maze::state::MazeState;
use forage_search::node::NodePool;

/// Built-in layouts exercised by the benches.
pub const LAYOUTS: [&str; 3] = ["tiny", "small", "open"];

/// A built-in maze world and its start state.
///
/// # Panics
///
/// Panics if `name` is not a built-in layout.
#[must_use]
pub fn maze(name: &str) -> (MazeWorld, MazeState) {
    let text = builtin_layout(name).unwrap_or_else(|| panic!("unknown layout {name}"));
    let world = MazeWorld::from_text(text).unwrap_or_else(|e| panic!("{name}: {e}"));
    let start = world.initial_state();
    (world, start)
}

/// A pool with `n` children of the root, with descending evaluation terms.
#[must_use]
pub fn flat_pool(n: u64) -> NodePool<u64, u64> {
    let mut pool = NodePool::with_root(0);
    for i in 0..n {
        #[allow(clippy::cast_possible_wrap)]
        let eval_term = -(i as i64);
        let _ = pool.add_child(0, i, i + 1, eval_term);
    }
    pool
}
