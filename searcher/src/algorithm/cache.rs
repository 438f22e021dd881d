//! Search cacheing support to eliminate already explored items.

use std::collections::{HashMap, HashSet};
use std::default::Default;
use std::hash::Hash;

use crate::node::SearchNode;

/// Defines the behavior required of a search cache.
pub trait Cache: Default {
    type State;

    /// Cost assigned to a child reached from `parent`.
    fn step_cost(&self, parent: &SearchNode<Self::State>) -> f64;

    /// Record that `state` was reached at `cost`, returning whether
    /// the search should push it onto the frontier.
    fn check(&mut self, state: &Self::State, cost: f64) -> bool;

    fn len(&self) -> usize;
}

/// Remembers every state discovered, and admits each state once.
///
/// Searches using this cache ignore cost entirely.
#[derive(Debug)]
pub struct VisitedCache<T> {
    cache: HashSet<T>,
}

impl<T> Default for VisitedCache<T> {
    fn default() -> Self {
        VisitedCache {
            cache: HashSet::new(),
        }
    }
}

impl<T> Cache for VisitedCache<T>
where
    T: Clone + Eq + Hash,
{
    type State = T;

    fn step_cost(&self, _parent: &SearchNode<T>) -> f64 {
        0.0
    }

    fn check(&mut self, state: &T, _cost: f64) -> bool {
        if self.cache.contains(state) {
            return false;
        }
        self.cache.insert(state.clone());
        true
    }

    fn len(&self) -> usize {
        self.cache.len()
    }
}

/// Provides a simple hashmap cache which stores
/// the cheapest cost seen for every state encountered.
///
/// Every transition costs one step.
#[derive(Debug)]
pub struct CostCache<T> {
    cache: HashMap<T, f64>,
}

impl<T> Default for CostCache<T> {
    fn default() -> Self {
        CostCache {
            cache: HashMap::new(),
        }
    }
}

impl<T> Cache for CostCache<T>
where
    T: Clone + Eq + Hash,
{
    type State = T;

    fn step_cost(&self, parent: &SearchNode<T>) -> f64 {
        parent.cost() + 1.0
    }

    fn check(&mut self, state: &T, cost: f64) -> bool {
        // (a) States which are not in the cache are added.
        // (b) States already cached at an equal or lower cost are ignored.
        // (c) States already cached at a higher cost take the new cost,
        //     even when an older entry is still waiting in the frontier.
        match self.cache.get_mut(state) {
            Some(cached) if *cached <= cost => false,
            Some(cached) => {
                *cached = cost;
                true
            }
            None => {
                self.cache.insert(state.clone(), cost);
                true
            }
        }
    }

    fn len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn visited_admits_once() {
        let mut cache = VisitedCache::default();
        assert!(cache.check(&"a", 0.0));
        assert!(!cache.check(&"a", 0.0));
        assert!(cache.check(&"b", 5.0));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn cost_admits_strict_improvement() {
        let mut cache = CostCache::default();
        assert!(cache.check(&"a", 3.0));
        assert!(!cache.check(&"a", 3.0));
        assert!(!cache.check(&"a", 4.0));
        assert!(cache.check(&"a", 2.0));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn step_costs() {
        let node = SearchNode::new("a", None, 2.0, 7.0);
        assert_eq!(VisitedCache::default().step_cost(&node), 0.0);
        assert_eq!(CostCache::default().step_cost(&node), 3.0);
    }
}
