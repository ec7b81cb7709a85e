//! A generic A* search in the style of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html),
//! with the open set ordering fixed so that equal-priority nodes are always expanded in the same
//! order.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::debug;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Entry of the open set. Several entries may exist for the same node if a cheaper route to it
/// was found after it was first queued; only the one matching the recorded cost is expanded.
struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    sequence: usize,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
            && self.cost.eq(&other.cost)
            && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first. Ties go to the largest cost (deepest node), then to the
        // entry that was queued first.
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Per-query search bookkeeping. `parents` maps every discovered node to its back-pointer and
/// the cost of the cheapest known route from the start; a node that is absent has infinite cost.
pub struct SearchState<N, C> {
    to_see: BinaryHeap<SmallestCostHolder<C>>,
    parents: FxIndexMap<N, (usize, C)>,
    sequence: usize,
    expanded: usize,
}

impl<N, C> SearchState<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
{
    /// Opens a search at `start`, queued with its heuristic estimate as priority.
    pub fn new(start: &N, start_estimate: C) -> SearchState<N, C> {
        let mut state = SearchState {
            to_see: BinaryHeap::new(),
            parents: FxIndexMap::default(),
            sequence: 0,
            expanded: 0,
        };
        state.parents.insert(start.clone(), (usize::MAX, Zero::zero()));
        state.push(start_estimate, Zero::zero(), 0);
        state
    }

    fn push(&mut self, estimated_cost: C, cost: C, index: usize) {
        self.to_see.push(SmallestCostHolder {
            estimated_cost,
            cost,
            sequence: self.sequence,
            index,
        });
        self.sequence += 1;
    }

    /// Number of nodes expanded so far.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    fn reverse_path(&self, goal: usize) -> Vec<N> {
        let mut path: Vec<N> = std::iter::successors(Some(goal), |&i| {
            self.parents
                .get_index(i)
                .map(|(_, &(parent, _))| parent)
                .filter(|&parent| parent != usize::MAX)
        })
        .filter_map(|i| self.parents.get_index(i).map(|(node, _)| node.clone()))
        .collect();
        path.reverse();
        path
    }

    /// Runs the search to completion. Returns the path from the start to the first node accepted
    /// by `success` together with its cost, or [None] once the open set is exhausted.
    pub fn run<FN, IN, FH, FS>(
        &mut self,
        mut successors: FN,
        mut heuristic: FH,
        mut success: FS,
    ) -> Option<(Vec<N>, C)>
    where
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, C)>,
        FH: FnMut(&N) -> C,
        FS: FnMut(&N) -> bool,
    {
        while let Some(SmallestCostHolder { cost, index, .. }) = self.to_see.pop() {
            let successors = {
                let (node, &(_, c)) = self.parents.get_index(index)?;
                // A cheaper route to this node was queued after this entry; the entry is stale.
                if cost > c {
                    continue;
                }
                if success(node) {
                    debug!("Goal reached after expanding {} nodes", self.expanded);
                    return Some((self.reverse_path(index), cost));
                }
                self.expanded += 1;
                successors(node)
            };
            for (successor, move_cost) in successors {
                let new_cost = cost + move_cost;
                let h; // heuristic(&successor)
                let n; // index for successor
                match self.parents.entry(successor) {
                    Vacant(e) => {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    }
                    Occupied(mut e) => {
                        if e.get().1 > new_cost {
                            h = heuristic(e.key());
                            n = e.index();
                            e.insert((index, new_cost));
                        } else {
                            continue;
                        }
                    }
                }
                self.push(new_cost + h, new_cost, n);
            }
        }
        debug!("Open set exhausted after expanding {} nodes", self.expanded);
        None
    }
}

/// Convenience wrapper that runs a fresh [SearchState] from `start`.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    successors: FN,
    mut heuristic: FH,
    success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let start_estimate = heuristic(start);
    SearchState::new(start, start_estimate).run(successors, heuristic, success)
}
