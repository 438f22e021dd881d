use std::rc::Rc;

use anyhow::Error;
use searcher::{
    a_star, breadth_first, depth_first, dijkstra, distances_by_vertex, node_to_path, prim,
    SearchNode, SearchOptions,
};

use crate::network::Network;
use crate::CliError;

/// Endpoints and limits for a single run.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub from: Option<String>,
    pub to: Option<String>,
    pub options: SearchOptions,
}

impl Query {
    pub fn new<S: Into<String>>(from: Option<S>, to: Option<S>) -> Self {
        Query {
            from: from.map(Into::into),
            to: to.map(Into::into),
            options: SearchOptions::default(),
        }
    }

    fn endpoint<'q>(
        value: &'q Option<String>,
        flag: &'static str,
        network: &Network,
    ) -> Result<&'q String, Error> {
        let name = value.as_ref().ok_or(CliError::MissingArgument(flag))?;
        network.index_of(name)?;
        Ok(name)
    }

    fn source(&self, network: &Network) -> Result<&String, Error> {
        Self::endpoint(&self.from, "--from", network)
    }

    fn target(&self, network: &Network) -> Result<&String, Error> {
        Self::endpoint(&self.to, "--to", network)
    }
}

fn successors(network: &Network) -> impl Fn(&String) -> Vec<String> + '_ {
    move |name: &String| {
        network
            .graph()
            .neighbors_of_vertex(name)
            .map(|n| n.into_iter().cloned().collect())
            .unwrap_or_default()
    }
}

fn describe_search(from: &str, to: &str, found: Option<Rc<SearchNode<String>>>) -> String {
    match found {
        None => format!("No path from {} to {}\n", from, to),
        Some(node) => {
            let path = node_to_path(&node);
            format!(
                "Path from {} to {} ({} steps):\n{}\n",
                from,
                to,
                path.len() - 1,
                path.join(" -> ")
            )
        }
    }
}

pub(crate) fn bfs(network: &Network, query: &Query) -> Result<String, Error> {
    let (from, to) = (query.source(network)?, query.target(network)?);
    let found = breadth_first(from.clone(), |v: &String| v == to, successors(network))
        .with_options(query.options.clone())
        .run()?;
    Ok(describe_search(from, to, found))
}

pub(crate) fn dfs(network: &Network, query: &Query) -> Result<String, Error> {
    let (from, to) = (query.source(network)?, query.target(network)?);
    let found = depth_first(from.clone(), |v: &String| v == to, successors(network))
        .with_options(query.options.clone())
        .run()?;
    Ok(describe_search(from, to, found))
}

/// Uniform-cost A*: vertex names carry no position, so the estimate is zero.
pub(crate) fn astar(network: &Network, query: &Query) -> Result<String, Error> {
    let (from, to) = (query.source(network)?, query.target(network)?);
    let found = a_star(
        from.clone(),
        |v: &String| v == to,
        successors(network),
        |_: &String| 0.0,
    )
    .with_options(query.options.clone())
    .run()?;
    Ok(describe_search(from, to, found))
}

pub(crate) fn shortest_paths(network: &Network, query: &Query) -> Result<String, Error> {
    let graph = network.graph();
    let from = query.source(network)?;
    let result = dijkstra(graph, from)?;
    let named = distances_by_vertex(graph, &result.distances)?;

    let mut out = format!("Distances from {}:\n", from);
    for vertex in graph.vertices() {
        match named.get(vertex).copied().flatten() {
            Some(d) => out.push_str(&format!("{}: {}\n", vertex, d)),
            None => out.push_str(&format!("{}: unreachable\n", vertex)),
        }
    }

    if query.to.is_some() {
        let to = query.target(network)?;
        let end = network.index_of(to)?;
        out.push_str(&format!("Shortest path from {} to {}:\n", from, to));
        if result.distance(end).is_some() {
            let path = result.path_to(network.index_of(from)?, end)?;
            out.push_str(&graph.describe_path(&path)?);
        } else {
            out.push_str("unreachable\n");
        }
    }
    Ok(out)
}

pub(crate) fn spanning_tree(network: &Network, query: &Query) -> Result<String, Error> {
    let graph = network.graph();
    let start = match &query.from {
        Some(_) => network.index_of(query.source(network)?)?,
        None => 0,
    };
    let tree = prim(graph, start).ok_or(CliError::EmptyGraph)?;

    let mut out = graph.describe_path(&tree)?;
    let missing = graph.vertex_count() - 1 - tree.len();
    if missing > 0 {
        tracing::warn!(missing, "graph is disconnected");
        out.push_str(&format!(
            "{} vertices are not connected to {}\n",
            missing,
            graph.vertex_at(start)?
        ));
    }
    Ok(out)
}
