use rustc_hash::FxHashSet;
use std::{collections::VecDeque, hash::Hash};

/// Breadth-first search from `start`, returning the first state that satisfies
/// `is_goal`. States already expanded are skipped, so cyclic state spaces
/// terminate as long as they are finite.
pub fn bfs<S, G, F, I>(start: S, mut is_goal: G, mut neighbors: F) -> Option<S>
where
    S: Clone + Eq + Hash,
    G: FnMut(&S) -> bool,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
{
    let mut seen = FxHashSet::default();
    let mut todo = VecDeque::from([start]);
    while let Some(state) = todo.pop_front() {
        if !seen.insert(state.clone()) {
            continue;
        }
        if is_goal(&state) {
            tracing::trace!(expanded = seen.len(), "goal reached");
            return Some(state);
        }
        todo.extend(neighbors(&state));
    }
    tracing::trace!(expanded = seen.len(), "state space exhausted");
    None
}
