use crate::error::{Error, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use std::{cmp::Reverse, collections::BinaryHeap, hash::Hash};

/// Precedence rules between nodes, sortable over any subset of them.
///
/// An edge `(x, y)` means `x` must come before `y`. Registering the same edge
/// twice has no further effect.
#[derive(Debug, Clone)]
pub struct TopologicalSorter<N> {
    successors: FxHashMap<N, Vec<N>>,
    edges: FxHashSet<(N, N)>,
}

impl<N> Default for TopologicalSorter<N> {
    fn default() -> Self {
        TopologicalSorter {successors: FxHashMap::default(), edges: FxHashSet::default()}
    }
}

impl<N: Copy + Ord + Hash> TopologicalSorter<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_edge(&mut self, x: N, y: N) {
        if self.edges.insert((x, y)) {
            self.successors.entry(x).or_default().push(y);
        }
    }

    /// Number of distinct edges registered.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Orders the distinct members of `nodes` so that every edge between two of
    /// them is respected. Edges reaching outside `nodes` are ignored.
    ///
    /// Among nodes that are ready at the same time the smallest goes first, so the
    /// result depends only on which nodes are passed, not on their order.
    pub fn sort(&self, nodes: &[N]) -> Result<Vec<N>> {
        let mut in_degree: FxHashMap<N, usize> = nodes.iter().map(|&node| (node, 0)).collect();
        for (x, ys) in &self.successors {
            if !in_degree.contains_key(x) {continue}
            for y in ys {
                if let Some(degree) = in_degree.get_mut(y) {*degree += 1}
            }
        }

        let mut ready: BinaryHeap<Reverse<N>> = in_degree.iter()
            .filter(|&(_, &degree)| degree == 0)
            .map(|(&node, _)| Reverse(node))
            .collect();
        let mut sorted = Vec::with_capacity(in_degree.len());
        while let Some(Reverse(node)) = ready.pop() {
            sorted.push(node);
            for next in self.successors.get(&node).into_iter().flatten() {
                let Some(degree) = in_degree.get_mut(next) else {continue};
                *degree -= 1;
                if *degree == 0 {
                    ready.push(Reverse(*next));
                }
            }
        }

        let total = in_degree.len();
        if sorted.len() < total {
            tracing::debug!(sorted = sorted.len(), total, "cycle among requested nodes");
            return Err(Error::CycleDetected {sorted: sorted.len(), total});
        }
        tracing::debug!(total, "sorted");
        Ok(sorted)
    }

    /// Whether `nodes` already respects every edge between two of its members.
    pub fn is_sorted(&self, nodes: &[N]) -> bool {
        let position: FxHashMap<N, usize> =
            nodes.iter().enumerate().map(|(at, &node)| (node, at)).collect();
        self.edges.iter().all(|(x, y)| match (position.get(x), position.get(y)) {
            (Some(x_at), Some(y_at)) => x_at < y_at,
            _ => true,
        })
    }
}

impl<N: Copy + Ord + Hash> Extend<(N, N)> for TopologicalSorter<N> {
    fn extend<I: IntoIterator<Item = (N, N)>>(&mut self, edges: I) {
        for (x, y) in edges {
            self.add_edge(x, y);
        }
    }
}

impl<N: Copy + Ord + Hash> FromIterator<(N, N)> for TopologicalSorter<N> {
    fn from_iter<I: IntoIterator<Item = (N, N)>>(edges: I) -> Self {
        let mut sorter = Self::new();
        sorter.extend(edges);
        sorter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_chain() {
        let sorter: TopologicalSorter<u32> = [(1, 2), (2, 3), (4, 5)].into_iter().collect();
        assert_eq!(sorter.sort(&[1, 2, 3]).unwrap(), [1, 2, 3]);
        assert_eq!(sorter.sort(&[3, 1, 2]).unwrap(), [1, 2, 3]);
        assert_eq!(sorter.sort(&[5, 4]).unwrap(), [4, 5]);
    }

    #[test]
    fn test_diamond() {
        let sorter: TopologicalSorter<u32> = [(1, 2), (1, 3), (2, 4), (3, 4)].into_iter().collect();
        assert_eq!(sorter.sort(&[4, 3, 2, 1]).unwrap(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_independent_components_interleave() {
        let sorter: TopologicalSorter<u32> = [(1, 2), (3, 4)].into_iter().collect();
        assert_eq!(sorter.sort(&[4, 3, 2, 1]).unwrap(), [1, 2, 3, 4]);

        let sorter: TopologicalSorter<u32> = [(5, 1), (6, 2)].into_iter().collect();
        assert_eq!(sorter.sort(&[1, 2, 5, 6]).unwrap(), [5, 1, 6, 2]);
    }

    #[test]
    fn test_argument_order_is_irrelevant() {
        let sorter: TopologicalSorter<u32> =
            [(7, 3), (3, 9), (1, 9), (7, 1), (4, 2)].into_iter().collect();
        let nodes = [9, 4, 3, 7, 2, 1];
        let expected = sorter.sort(&nodes).unwrap();
        assert_eq!(expected, [4, 2, 7, 1, 3, 9]);
        for shuffled in nodes.into_iter().permutations(nodes.len()) {
            assert_eq!(sorter.sort(&shuffled).unwrap(), expected);
        }
    }

    #[test]
    fn test_edges_outside_subset_ignored() {
        let sorter: TopologicalSorter<u32> = [(1, 2), (2, 3), (9, 3), (3, 9)].into_iter().collect();
        assert_eq!(sorter.sort(&[3, 2]).unwrap(), [2, 3]);
        assert_eq!(sorter.sort(&[3, 1]).unwrap(), [1, 3]);
    }

    #[test]
    fn test_cycle() {
        let sorter: TopologicalSorter<u32> = [(1, 2), (2, 3), (3, 1), (0, 1)].into_iter().collect();
        let err = sorter.sort(&[0, 1, 2, 3]).unwrap_err();
        assert!(matches!(err, Error::CycleDetected {sorted: 1, total: 4}));
        assert_eq!(sorter.sort(&[0, 1, 2]).unwrap(), [0, 1, 2]);
    }

    #[test]
    fn test_self_loop() {
        let sorter: TopologicalSorter<u32> = [(1, 1)].into_iter().collect();
        assert!(matches!(sorter.sort(&[1]), Err(Error::CycleDetected {sorted: 0, total: 1})));
        assert_eq!(sorter.sort(&[2]).unwrap(), [2]);
    }

    #[test]
    fn test_duplicate_edges() {
        let mut sorter = TopologicalSorter::new();
        sorter.add_edge(1, 2);
        sorter.add_edge(1, 2);
        sorter.add_edge(2, 3);
        assert_eq!(sorter.edge_count(), 2);
        assert_eq!(sorter.sort(&[3, 2, 1]).unwrap(), [1, 2, 3]);
    }

    #[test]
    fn test_extend() {
        let mut sorter: TopologicalSorter<u32> = [(3, 1)].into_iter().collect();
        sorter.extend([(1, 2), (3, 1)]);
        assert_eq!(sorter.edge_count(), 2);
        assert_eq!(sorter.sort(&[1, 2, 3]).unwrap(), [3, 1, 2]);
    }

    #[test]
    fn test_sort_is_repeatable() {
        let sorter: TopologicalSorter<u32> = [(2, 1)].into_iter().collect();
        assert_eq!(sorter.sort(&[1, 2]).unwrap(), [2, 1]);
        assert_eq!(sorter.sort(&[1, 2]).unwrap(), [2, 1]);
    }

    #[test]
    fn test_duplicate_nodes_collapse() {
        let sorter: TopologicalSorter<u32> = [(2, 1)].into_iter().collect();
        assert_eq!(sorter.sort(&[1, 2, 1]).unwrap(), [2, 1]);
    }

    #[test]
    fn test_empty() {
        let sorter = TopologicalSorter::<u32>::new();
        assert!(sorter.sort(&[]).unwrap().is_empty());
        assert_eq!(sorter.sort(&[3, 1, 2]).unwrap(), [1, 2, 3]);
    }

    #[test]
    fn test_is_sorted() {
        let sorter: TopologicalSorter<u32> = [(1, 2), (2, 3), (4, 5)].into_iter().collect();
        assert!(sorter.is_sorted(&[1, 2, 3]));
        assert!(sorter.is_sorted(&[4, 5]));
        assert!(sorter.is_sorted(&[3, 4]));
        assert!(!sorter.is_sorted(&[2, 1, 3]));
        assert!(!sorter.is_sorted(&[1, 3, 2]));
        assert!(!sorter.is_sorted(&[5, 4]));
    }

    #[test]
    fn test_string_nodes() {
        let sorter: TopologicalSorter<&str> =
            [("shirt", "tie"), ("tie", "jacket"), ("trousers", "shoes")].into_iter().collect();
        assert_eq!(
            sorter.sort(&["shoes", "jacket", "tie", "shirt", "trousers"]).unwrap(),
            ["shirt", "tie", "jacket", "trousers", "shoes"]
        );
    }
}
