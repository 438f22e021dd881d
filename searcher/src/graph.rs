//! Adjacency-list graphs over indexed vertices.
//!
//! Vertices are stored in insertion order, and are addressed by
//! their position in that order. Edges are undirected: adding an
//! edge stores it in the adjacency list of both endpoints.

use std::collections::HashMap;
use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;

use crate::errors::{Result, SearchError};

pub(crate) mod dijkstra;
mod edge;
pub(crate) mod mst;
mod path;

pub use edge::{Edge, GraphEdge, WeightedEdge};
pub use path::{path_from_predecessors, total_weight, WeightedPath};

/// Graph with unweighted edges.
pub type UnweightedGraph<V> = Graph<V, Edge>;

/// Graph where every edge carries a weight.
pub type WeightedGraph<V> = Graph<V, WeightedEdge>;

#[derive(Debug, Clone)]
pub struct Graph<V, E> {
    vertices: Vec<V>,
    indices: HashMap<V, usize>,
    edges: Vec<Vec<E>>,
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            indices: HashMap::new(),
            edges: Vec::new(),
        }
    }
}

impl<V, E> Graph<V, E>
where
    V: Debug + Clone + Eq + Hash,
    E: GraphEdge,
{
    /// Create a graph with these vertices and no edges.
    pub fn new<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut graph = Self::default();
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        graph
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of entries across all adjacency lists. Each undirected
    /// edge is counted once from each end.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Add a vertex, returning its index.
    ///
    /// If an equal vertex is already present, lookups by value
    /// continue to find the earlier one.
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        let index = self.vertices.len();
        self.indices.entry(vertex.clone()).or_insert(index);
        self.vertices.push(vertex);
        self.edges.push(Vec::new());
        index
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.vertices.len() {
            Ok(())
        } else {
            Err(SearchError::IndexOutOfRange(index, self.vertices.len()))
        }
    }

    /// Connect both endpoints of this edge.
    pub fn add_edge(&mut self, edge: E) -> Result<()> {
        self.check_index(edge.u())?;
        self.check_index(edge.v())?;
        if !edge.weight().is_finite() {
            return Err(SearchError::InvalidWeight(edge.weight()));
        }

        let reversed = edge.reversed();
        self.edges[edge.u()].push(edge);
        self.edges[reversed.u()].push(reversed);
        Ok(())
    }

    pub fn vertex_at(&self, index: usize) -> Result<&V> {
        self.vertices
            .get(index)
            .ok_or(SearchError::IndexOutOfRange(index, self.vertices.len()))
    }

    pub fn index_of(&self, vertex: &V) -> Result<usize> {
        self.indices
            .get(vertex)
            .copied()
            .ok_or_else(|| SearchError::VertexNotFound(format!("{:?}", vertex)))
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.indices.contains_key(vertex)
    }

    /// Vertices in index order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    /// Edges leaving the vertex at this index.
    pub fn edges_of(&self, index: usize) -> Result<&[E]> {
        self.check_index(index)?;
        Ok(&self.edges[index])
    }

    /// Edges leaving this vertex.
    pub fn edges_of_vertex(&self, vertex: &V) -> Result<&[E]> {
        self.edges_of(self.index_of(vertex)?)
    }

    /// Vertices adjacent to the vertex at this index, in the order
    /// their edges were added.
    pub fn neighbors_of(&self, index: usize) -> Result<Vec<&V>> {
        Ok(self
            .edges_of(index)?
            .iter()
            .map(|e| &self.vertices[e.v()])
            .collect())
    }

    pub fn neighbors_of_vertex(&self, vertex: &V) -> Result<Vec<&V>> {
        self.neighbors_of(self.index_of(vertex)?)
    }

    /// Render a path of edges as one line per edge, with the total weight.
    pub fn describe_path<P>(&self, path: P) -> Result<String>
    where
        P: AsRef<[E]>,
        V: fmt::Display,
    {
        let mut out = String::new();
        let mut total = 0.0;
        for edge in path.as_ref() {
            out.push_str(&format!(
                "{} {}> {}\n",
                self.vertex_at(edge.u())?,
                edge.weight(),
                self.vertex_at(edge.v())?
            ));
            total += edge.weight();
        }
        out.push_str(&format!("Total weight: {}\n", total));
        Ok(out)
    }
}

impl<V> Graph<V, Edge>
where
    V: Debug + Clone + Eq + Hash,
{
    pub fn add_edge_by_indices(&mut self, u: usize, v: usize) -> Result<()> {
        self.add_edge(Edge::new(u, v))
    }

    pub fn add_edge_by_values(&mut self, first: &V, second: &V) -> Result<()> {
        let u = self.index_of(first)?;
        let v = self.index_of(second)?;
        self.add_edge_by_indices(u, v)
    }
}

impl<V> Graph<V, WeightedEdge>
where
    V: Debug + Clone + Eq + Hash,
{
    pub fn add_edge_by_indices(&mut self, u: usize, v: usize, weight: f64) -> Result<()> {
        self.add_edge(WeightedEdge::new(u, v, weight))
    }

    pub fn add_edge_by_values(&mut self, first: &V, second: &V, weight: f64) -> Result<()> {
        let u = self.index_of(first)?;
        let v = self.index_of(second)?;
        self.add_edge_by_indices(u, v, weight)
    }

    /// Neighbors of the vertex at this index, with the weight of
    /// the edge leading to each.
    pub fn neighbors_with_weights(&self, index: usize) -> Result<Vec<(&V, f64)>> {
        Ok(self
            .edges_of(index)?
            .iter()
            .map(|e| (&self.vertices[e.v], e.weight))
            .collect())
    }
}

impl<V> fmt::Display for Graph<V, Edge>
where
    V: Debug + Clone + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, vertex) in self.vertices.iter().enumerate() {
            let neighbors: Vec<&V> = self.edges[index]
                .iter()
                .map(|e| &self.vertices[e.v])
                .collect();
            writeln!(f, "{:?} -> {:?}", vertex, neighbors)?;
        }
        Ok(())
    }
}

impl<V> fmt::Display for Graph<V, WeightedEdge>
where
    V: Debug + Clone + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, vertex) in self.vertices.iter().enumerate() {
            let neighbors: Vec<(&V, f64)> = self.edges[index]
                .iter()
                .map(|e| (&self.vertices[e.v], e.weight))
                .collect();
            writeln!(f, "{:?} -> {:?}", vertex, neighbors)?;
        }
        Ok(())
    }
}
