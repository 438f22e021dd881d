//! Generalized search algorithms, especially useful for graph traversal.
//!
//! Searches are driven by three functions supplied by the caller: a
//! goal test, a successor function, and (for A*) a heuristic. Each
//! search returns the terminal [SearchNode], whose parent links can be
//! turned into a path with [node_to_path].
//!
//! The [graph] module provides indexed, undirected graphs along with
//! Dijkstra's algorithm and Prim's minimum spanning tree.

pub mod algorithm;
mod contains;
mod errors;
pub mod frontier;
pub mod graph;
mod node;

pub use errors::Result as SearchResult;
pub use errors::SearchError;

pub use algorithm::astar::{a_star, astar, AStarQueue, AStarSearcher};
pub use algorithm::basic::{bfs, breadth_first, BreadthFirstSearcher};
pub use algorithm::basic::{depth_first, dfs, DepthFirstSearcher};
pub use algorithm::cache::{Cache, CostCache, VisitedCache};
pub use algorithm::{SearchAlgorithm, SearchOptions};
pub use contains::{binary_contains, linear_contains};
pub use frontier::{PriorityQueue, Queue, SearchQueue, Stack};
pub use node::{node_to_path, Ancestors, SearchNode};

pub use graph::dijkstra::{dijkstra, distances_by_vertex, DijkstraResult};
pub use graph::mst::{minimum_spanning_tree, prim};
pub use graph::{path_from_predecessors, total_weight};
