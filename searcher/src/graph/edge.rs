use std::cmp::{Ord, Ordering, PartialEq, PartialOrd};
use std::fmt;
use std::fmt::Debug;

/// An edge stored in a graph's adjacency lists.
///
/// Edges are directed from `u` to `v`; graphs insert both an edge
/// and its reversal to represent an undirected connection.
pub trait GraphEdge: Debug + Clone {
    /// Index of the vertex this edge leaves.
    fn u(&self) -> usize;

    /// Index of the vertex this edge enters.
    fn v(&self) -> usize;

    /// The same connection in the opposite direction.
    fn reversed(&self) -> Self;

    /// Cost of traversing this edge.
    fn weight(&self) -> f64 {
        1.0
    }
}

/// An unweighted connection between two vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
}

impl Edge {
    pub fn new(u: usize, v: usize) -> Self {
        Self { u, v }
    }
}

impl GraphEdge for Edge {
    fn u(&self) -> usize {
        self.u
    }

    fn v(&self) -> usize {
        self.v
    }

    fn reversed(&self) -> Self {
        Edge::new(self.v, self.u)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.u, self.v)
    }
}

/// A connection with a cost attached.
///
/// Weighted edges sort by weight first, so a priority queue of them
/// yields the lightest edge. Edges of equal weight then sort by their
/// endpoints.
#[derive(Debug, Clone, Copy)]
pub struct WeightedEdge {
    pub u: usize,
    pub v: usize,
    pub weight: f64,
}

impl WeightedEdge {
    pub fn new(u: usize, v: usize, weight: f64) -> Self {
        Self { u, v, weight }
    }

    /// The endpoints of this edge, without its weight.
    pub fn edge(&self) -> Edge {
        Edge::new(self.u, self.v)
    }
}

impl GraphEdge for WeightedEdge {
    fn u(&self) -> usize {
        self.u
    }

    fn v(&self) -> usize {
        self.v
    }

    fn reversed(&self) -> Self {
        WeightedEdge::new(self.v, self.u, self.weight)
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}

impl Ord for WeightedEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.u.cmp(&other.u))
            .then_with(|| self.v.cmp(&other.v))
    }
}

impl PartialOrd for WeightedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for WeightedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for WeightedEdge {}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}> {}", self.u, self.weight, self.v)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reversal() {
        assert_eq!(Edge::new(1, 2).reversed(), Edge::new(2, 1));
        assert_eq!(
            WeightedEdge::new(1, 2, 0.5).reversed(),
            WeightedEdge::new(2, 1, 0.5)
        );
        assert_eq!(Edge::new(3, 4).weight(), 1.0);
    }

    #[test]
    fn ordered_by_weight() {
        let mut edges = vec![
            WeightedEdge::new(0, 1, 3.0),
            WeightedEdge::new(4, 2, 1.0),
            WeightedEdge::new(1, 3, 2.0),
            WeightedEdge::new(0, 2, 1.0),
        ];
        edges.sort();
        let weights: Vec<f64> = edges.iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![1.0, 1.0, 2.0, 3.0]);
        assert_eq!(edges[0].edge(), Edge::new(0, 2));
    }

    #[test]
    fn display() {
        assert_eq!(WeightedEdge::new(0, 1, 2.5).to_string(), "0 2.5> 1");
        assert_eq!(Edge::new(0, 1).to_string(), "0 -> 1");
    }
}
