use std::collections::HashMap;

use super::WeightedEdge;
use crate::errors::{Result, SearchError};

/// A sequence of edges, each starting where the previous one ended.
pub type WeightedPath = Vec<WeightedEdge>;

/// Sum of the weights along a path.
pub fn total_weight(path: &[WeightedEdge]) -> f64 {
    path.iter().map(|e| e.weight).sum()
}

/// Follow a map of predecessor edges back from `end` to `start`.
///
/// The map holds, for each vertex, the edge used to reach it. The
/// returned edges run from `start` to `end`. A path from a vertex to
/// itself is empty.
pub fn path_from_predecessors(
    start: usize,
    end: usize,
    predecessors: &HashMap<usize, WeightedEdge>,
) -> Result<WeightedPath> {
    if start == end {
        return Ok(Vec::new());
    }
    if predecessors.is_empty() {
        return Err(SearchError::NoPathRecorded(end));
    }

    let mut path = Vec::new();
    let mut vertex = end;
    while vertex != start {
        // A consistent map can't need more steps than it has entries.
        if path.len() >= predecessors.len() {
            return Err(SearchError::NoPathRecorded(vertex));
        }
        let edge = predecessors
            .get(&vertex)
            .ok_or(SearchError::NoPathRecorded(vertex))?;
        path.push(*edge);
        vertex = edge.u;
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod test {
    use super::*;

    fn chain() -> HashMap<usize, WeightedEdge> {
        vec![
            (1, WeightedEdge::new(0, 1, 1.0)),
            (2, WeightedEdge::new(1, 2, 2.0)),
            (3, WeightedEdge::new(2, 3, 0.5)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn follows_chain() {
        let path = path_from_predecessors(0, 3, &chain()).unwrap();
        assert_eq!(
            path,
            vec![
                WeightedEdge::new(0, 1, 1.0),
                WeightedEdge::new(1, 2, 2.0),
                WeightedEdge::new(2, 3, 0.5),
            ]
        );
        assert_eq!(total_weight(&path), 3.5);
    }

    #[test]
    fn partial_chain() {
        let path = path_from_predecessors(1, 3, &chain()).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].u, 1);
    }

    #[test]
    fn same_vertex() {
        assert_eq!(path_from_predecessors(2, 2, &HashMap::new()), Ok(vec![]));
    }

    #[test]
    fn empty_map() {
        assert_eq!(
            path_from_predecessors(0, 3, &HashMap::new()),
            Err(SearchError::NoPathRecorded(3))
        );
    }

    #[test]
    fn missing_link() {
        let mut map = chain();
        map.remove(&2);
        assert_eq!(
            path_from_predecessors(0, 3, &map),
            Err(SearchError::NoPathRecorded(2))
        );
        assert_eq!(
            path_from_predecessors(0, 7, &map),
            Err(SearchError::NoPathRecorded(7))
        );
    }

    #[test]
    fn cycle_in_map() {
        let map: HashMap<usize, WeightedEdge> = vec![
            (1, WeightedEdge::new(2, 1, 1.0)),
            (2, WeightedEdge::new(1, 2, 1.0)),
        ]
        .into_iter()
        .collect();
        assert!(path_from_predecessors(0, 1, &map).is_err());
    }

    #[test]
    fn empty_total() {
        assert_eq!(total_weight(&[]), 0.0);
    }
}
