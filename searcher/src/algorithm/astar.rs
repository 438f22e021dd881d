use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::default::Default;
use std::hash::Hash;
use std::rc::Rc;

use super::cache::CostCache;
use super::SearchAlgorithm;
use crate::errors::Result;
use crate::frontier::{PriorityQueue, SearchQueue};
use crate::node::SearchNode;

/// Orders search nodes by cost plus heuristic.
#[derive(Debug)]
struct Estimate<T> {
    node: Rc<SearchNode<T>>,
}

impl<T> PartialEq for Estimate<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Estimate<T> {}

impl<T> Ord for Estimate<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node.score().total_cmp(&other.node.score())
    }
}

impl<T> PartialOrd for Estimate<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority frontier which always yields the node with the
/// lowest estimated total cost.
#[derive(Debug)]
pub struct AStarQueue<T> {
    queue: PriorityQueue<Estimate<T>>,
}

impl<T> Default for AStarQueue<T> {
    fn default() -> Self {
        AStarQueue {
            queue: PriorityQueue::new(),
        }
    }
}

impl<T> SearchQueue for AStarQueue<T> {
    type Item = Rc<SearchNode<T>>;

    fn pop(&mut self) -> Result<Self::Item> {
        self.queue.pop().map(|e| e.node)
    }

    fn push(&mut self, item: Self::Item) {
        self.queue.push(Estimate { node: item });
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

pub type AStarSearcher<'f, T> = SearchAlgorithm<'f, T, AStarQueue<T>, CostCache<T>>;

/// Build an A* searcher, which can be configured before it is run.
///
/// Every transition costs one step. The heuristic must never
/// overestimate the remaining number of steps for the result to be
/// optimal; this is not checked.
pub fn a_star<'f, T, G, S, H>(
    origin: T,
    goal_test: G,
    successors: S,
    heuristic: H,
) -> AStarSearcher<'f, T>
where
    T: Clone + Eq + Hash + 'f,
    G: Fn(&T) -> bool + 'f,
    S: Fn(&T) -> Vec<T> + 'f,
    H: Fn(&T) -> f64 + 'f,
{
    SearchAlgorithm::new(
        origin,
        Box::new(goal_test),
        Box::new(successors),
        Box::new(heuristic),
    )
}

/// Perform an A* search.
///
/// A state is pushed again whenever it is reached more cheaply than
/// before, even when an older entry for it is still in the frontier.
pub fn astar<'f, T, G, S, H>(
    origin: T,
    goal_test: G,
    successors: S,
    heuristic: H,
) -> Result<Option<Rc<SearchNode<T>>>>
where
    T: Clone + Eq + Hash + 'f,
    G: Fn(&T) -> bool + 'f,
    S: Fn(&T) -> Vec<T> + 'f,
    H: Fn(&T) -> f64 + 'f,
{
    a_star(origin, goal_test, successors, heuristic).run()
}
