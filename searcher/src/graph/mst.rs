//! Minimum spanning trees with Prim's algorithm.

use std::fmt::Debug;
use std::hash::Hash;

use super::{WeightedEdge, WeightedGraph, WeightedPath};
use crate::frontier::{PriorityQueue, SearchQueue};

/// Build a minimum spanning tree by growing it outward from `start`.
///
/// Returns `None` when `start` is not a vertex index. Only the
/// vertices connected to `start` are spanned: on a disconnected graph
/// the other components are left out of the result.
#[tracing::instrument(level = "debug", skip(graph), fields(vertices = graph.vertex_count()))]
pub fn prim<V>(graph: &WeightedGraph<V>, start: usize) -> Option<WeightedPath>
where
    V: Debug + Clone + Eq + Hash,
{
    if start >= graph.vertex_count() {
        return None;
    }

    let mut result = WeightedPath::new();
    let mut queue: PriorityQueue<WeightedEdge> = PriorityQueue::new();
    let mut visited = vec![false; graph.vertex_count()];

    let visit = |index: usize, visited: &mut Vec<bool>, queue: &mut PriorityQueue<WeightedEdge>| {
        visited[index] = true;
        // Every index reaching here is `start` or an edge endpoint, both in range.
        for edge in &graph.edges[index] {
            if !visited[edge.v] {
                queue.push(*edge);
            }
        }
    };

    visit(start, &mut visited, &mut queue);

    while let Ok(edge) = queue.pop() {
        if visited[edge.v] {
            tracing::trace!(u = edge.u, v = edge.v, "discarding redundant edge");
            continue;
        }
        result.push(edge);
        visit(edge.v, &mut visited, &mut queue);
    }

    tracing::debug!(edges = result.len(), "spanning tree complete");
    Some(result)
}

/// Prim's algorithm starting from the first vertex.
pub fn minimum_spanning_tree<V>(graph: &WeightedGraph<V>) -> Option<WeightedPath>
where
    V: Debug + Clone + Eq + Hash,
{
    prim(graph, 0)
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::super::helpers::five;
    use super::super::{total_weight, Edge};
    use super::*;

    fn undirected(path: &[WeightedEdge]) -> HashSet<(usize, usize)> {
        path.iter()
            .map(|e| (e.u.min(e.v), e.u.max(e.v)))
            .collect()
    }

    #[test]
    fn five_vertex_tree() {
        let graph = five();
        let tree = prim(&graph, 0).unwrap();
        assert_eq!(tree.len(), 4);
        assert_eq!(total_weight(&tree), 5.0);
        assert_eq!(
            undirected(&tree),
            vec![(0, 1), (1, 2), (2, 3), (3, 4)].into_iter().collect()
        );
        assert_eq!(tree[0].edge(), Edge::new(0, 1));
    }

    #[test]
    fn any_start_same_weight() {
        let graph = five();
        for start in 0..graph.vertex_count() {
            let tree = prim(&graph, start).unwrap();
            assert_eq!(total_weight(&tree), 5.0, "start {}", start);
        }
        assert_eq!(minimum_spanning_tree(&graph), prim(&graph, 0));
    }

    #[test]
    fn start_out_of_range() {
        assert_eq!(prim(&five(), 99), None);
        assert_eq!(prim(&five(), 5), None);
    }

    #[test]
    fn disconnected_is_partial() {
        let mut graph = five();
        let f = graph.add_vertex("F");
        let g = graph.add_vertex("G");
        graph.add_edge_by_indices(f, g, 0.1).unwrap();

        let tree = prim(&graph, 0).unwrap();
        assert_eq!(tree.len(), 4);
        assert_eq!(total_weight(&tree), 5.0);

        let other = prim(&graph, f).unwrap();
        assert_eq!(other, vec![WeightedEdge::new(f, g, 0.1)]);
    }

    #[test]
    fn empty_graph() {
        let graph: WeightedGraph<u8> = WeightedGraph::default();
        assert_eq!(minimum_spanning_tree(&graph), None);
    }

    #[test]
    fn isolated_start() {
        let graph = WeightedGraph::new(vec!['a', 'b']);
        assert_eq!(prim(&graph, 1), Some(vec![]));
    }

    #[test]
    fn redundant_edges_skipped() {
        let mut graph = WeightedGraph::new(vec!['a', 'b', 'c']);
        graph.add_edge_by_indices(0, 1, 1.0).unwrap();
        graph.add_edge_by_indices(0, 1, 3.0).unwrap();
        graph.add_edge_by_indices(1, 2, 1.0).unwrap();
        graph.add_edge_by_indices(2, 2, 0.0).unwrap();
        graph.add_edge_by_indices(0, 2, 5.0).unwrap();

        let tree = prim(&graph, 0).unwrap();
        assert_eq!(tree, vec![WeightedEdge::new(0, 1, 1.0), WeightedEdge::new(1, 2, 1.0)]);
    }
}
