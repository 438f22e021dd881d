//! Edge-list input files.
//!
//! Each line holds either a single vertex name, two names (an edge
//! of weight 1), or two names followed by a weight. Anything after
//! a `#` is ignored.

use std::io::Read;
use std::str::FromStr;

use anyhow::Error;
use lazy_static::lazy_static;
use regex::Regex;
use searcher::graph::WeightedGraph;

use crate::CliError;

/// A weighted graph whose vertices are named by strings.
#[derive(Debug, Clone, Default)]
pub struct Network(WeightedGraph<String>);

impl Network {
    /// Read an edge list to the end.
    pub fn read(mut reader: Box<dyn Read + 'static>) -> Result<Self, Error> {
        let mut buffer = String::new();
        reader.read_to_string(&mut buffer)?;
        buffer.parse()
    }

    pub fn graph(&self) -> &WeightedGraph<String> {
        &self.0
    }

    /// Index of the vertex with this name.
    pub fn index_of(&self, name: &str) -> Result<usize, Error> {
        Ok(self.0.index_of(&name.to_string())?)
    }

    fn vertex(&mut self, name: &str) -> usize {
        match self.index_of(name) {
            Ok(index) => index,
            Err(_) => self.0.add_vertex(name.to_string()),
        }
    }
}

fn parse_line(number: usize, line: &str) -> Result<Option<(String, Option<(String, f64)>)>, Error> {
    lazy_static! {
        static ref RE: Regex =
            Regex::new(r"^(?P<u>\S+)(?:\s+(?P<v>\S+)(?:\s+(?P<w>\S+))?)?$").unwrap();
    }

    let content = line.split('#').next().unwrap_or("").trim();
    if content.is_empty() {
        return Ok(None);
    }

    let invalid = || CliError::ParseLine(number, line.to_string());
    let caps = RE.captures(content).ok_or_else(invalid)?;

    let u = caps["u"].to_string();
    let edge = match caps.name("v") {
        None => None,
        Some(v) => {
            let weight = match caps.name("w") {
                None => 1.0,
                Some(w) => w.as_str().parse::<f64>().map_err(|_| invalid())?,
            };
            if !weight.is_finite() {
                return Err(invalid().into());
            }
            if weight < 0.0 {
                return Err(CliError::NegativeWeight(number, weight).into());
            }
            Some((v.as_str().to_string(), weight))
        }
    };

    Ok(Some((u, edge)))
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut network = Network::default();
        for (i, line) in s.lines().enumerate() {
            if let Some((u, edge)) = parse_line(i + 1, line)? {
                let u = network.vertex(&u);
                if let Some((v, weight)) = edge {
                    let v = network.vertex(&v);
                    network.0.add_edge_by_indices(u, v, weight)?;
                }
            }
        }
        tracing::debug!(
            vertices = network.0.vertex_count(),
            edges = network.0.edge_count() / 2,
            "loaded network"
        );
        Ok(network)
    }
}
