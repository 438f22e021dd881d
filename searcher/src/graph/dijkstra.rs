//! Dijkstra's Algorithm

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use super::{path_from_predecessors, WeightedEdge, WeightedGraph, WeightedPath};
use crate::errors::Result;
use crate::frontier::{PriorityQueue, SearchQueue};

/// Queue entry for Dijkstra's algorithm, which sorts by
/// distance from the root.
#[derive(Debug, Clone, Copy)]
struct DijkstraNode {
    vertex: usize,
    distance: f64,
}

impl PartialEq for DijkstraNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DijkstraNode {}

impl Ord for DijkstraNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance.total_cmp(&other.distance)
    }
}

impl PartialOrd for DijkstraNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest distances from a root vertex, and the edges which
/// achieve them.
#[derive(Debug, Clone, PartialEq)]
pub struct DijkstraResult {
    /// Distance to each vertex by index, `None` when unreachable.
    pub distances: Vec<Option<f64>>,

    /// The final edge on the shortest path to each reached vertex.
    pub predecessors: HashMap<usize, WeightedEdge>,
}

impl DijkstraResult {
    pub fn distance(&self, index: usize) -> Option<f64> {
        self.distances.get(index).copied().flatten()
    }

    /// Edges along the shortest path from `start` to `end`.
    pub fn path_to(&self, start: usize, end: usize) -> Result<WeightedPath> {
        path_from_predecessors(start, end, &self.predecessors)
    }
}

/// Find the shortest distance from `root` to every vertex.
///
/// Edge weights must not be negative. This is not checked, and
/// negative weights produce incorrect distances.
#[tracing::instrument(level = "debug", skip(graph, root), fields(vertices = graph.vertex_count()))]
pub fn dijkstra<V>(graph: &WeightedGraph<V>, root: &V) -> Result<DijkstraResult>
where
    V: Debug + Clone + Eq + Hash,
{
    let first = graph.index_of(root)?;
    let mut distances: Vec<Option<f64>> = vec![None; graph.vertex_count()];
    distances[first] = Some(0.0);
    let mut predecessors = HashMap::new();

    let mut queue = PriorityQueue::new();
    queue.push(DijkstraNode {
        vertex: first,
        distance: 0.0,
    });

    let mut pops = 0usize;
    while !queue.is_empty() {
        let u = queue.pop()?.vertex;
        pops += 1;

        // Stale entries reuse the best distance already recorded for u.
        let dist_u = match distances[u] {
            Some(d) => d,
            None => continue,
        };

        for edge in graph.edges_of(u)? {
            let candidate = dist_u + edge.weight;
            let improves = match distances[edge.v] {
                None => true,
                Some(dist_v) => dist_v > candidate,
            };
            if improves {
                distances[edge.v] = Some(candidate);
                predecessors.insert(edge.v, *edge);
                queue.push(DijkstraNode {
                    vertex: edge.v,
                    distance: candidate,
                });
            }
        }
    }

    tracing::debug!(
        pops,
        reached = predecessors.len() + 1,
        "shortest paths complete"
    );

    Ok(DijkstraResult {
        distances,
        predecessors,
    })
}

/// Key distances by vertex value rather than index.
pub fn distances_by_vertex<V>(
    graph: &WeightedGraph<V>,
    distances: &[Option<f64>],
) -> Result<HashMap<V, Option<f64>>>
where
    V: Debug + Clone + Eq + Hash,
{
    distances
        .iter()
        .enumerate()
        .map(|(index, distance)| Ok((graph.vertex_at(index)?.clone(), *distance)))
        .collect()
}
