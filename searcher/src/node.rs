//! Search nodes and the paths which can be recovered from them.

use std::rc::Rc;

/// A state discovered during a search, along with how
/// the search got there.
///
/// Each node holds a shared reference to its parent, so the
/// solution path can be recovered from the terminal node alone
/// without storing paths during the search.
#[derive(Debug)]
pub struct SearchNode<T> {
    state: T,
    parent: Option<Rc<SearchNode<T>>>,
    cost: f64,
    heuristic: f64,
}

impl<T> SearchNode<T> {
    /// A node with no parent, zero cost and zero heuristic.
    pub fn root(state: T) -> Self {
        Self::new(state, None, 0.0, 0.0)
    }

    pub fn new(state: T, parent: Option<Rc<SearchNode<T>>>, cost: f64, heuristic: f64) -> Self {
        Self {
            state,
            parent,
            cost,
            heuristic,
        }
    }

    pub fn state(&self) -> &T {
        &self.state
    }

    pub fn parent(&self) -> Option<&SearchNode<T>> {
        self.parent.as_deref()
    }

    /// Accumulated cost from the root to this node.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Estimated remaining cost from this node to a goal.
    pub fn heuristic(&self) -> f64 {
        self.heuristic
    }

    /// Priority used by A*, smaller is better.
    pub fn score(&self) -> f64 {
        self.cost + self.heuristic
    }

    /// Number of steps between the root and this node.
    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }

    /// Iterate from this node back up to the root.
    pub fn ancestors(&self) -> Ancestors<'_, T> {
        Ancestors { node: Some(self) }
    }
}

/// Iterator over a node and each of its parents in turn.
#[derive(Debug)]
pub struct Ancestors<'n, T> {
    node: Option<&'n SearchNode<T>>,
}

impl<'n, T> Iterator for Ancestors<'n, T> {
    type Item = &'n SearchNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.node?;
        self.node = current.parent();
        Some(current)
    }
}

impl<T> Drop for SearchNode<T> {
    // Unlink the parent chain one node at a time, otherwise a long
    // solution path would recurse once per node when the last
    // reference goes away.
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            match Rc::try_unwrap(node) {
                Ok(mut node) => parent = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// Recover the states visited on the way to this node,
/// starting from the root.
pub fn node_to_path<T>(node: &SearchNode<T>) -> Vec<T>
where
    T: Clone,
{
    let mut path: Vec<T> = node.ancestors().map(|n| n.state().clone()).collect();
    path.reverse();
    path
}
