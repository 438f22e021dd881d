#![deny(clippy::all)]

use clap::{value_t, App, Arg};

use lazy_static::lazy_static;
use thiserror::Error;

use std::collections::HashMap;
use std::fs::File;
use std::io;

mod commands;
mod logging;
pub mod network;

pub use commands::Query;
pub use network::Network;

type Error = anyhow::Error;
type Command = Box<dyn (Fn(&Network, &Query) -> Result<String, Error>) + Send + Sync + 'static>;

const ALGORITHMS: [&str; 5] = ["bfs", "dfs", "astar", "dijkstra", "mst"];

lazy_static! {
    static ref COMMANDS: HashMap<&'static str, Command> = {
        let mut s: HashMap<&'static str, Command> = HashMap::new();
        s.insert("bfs", Box::new(commands::bfs));
        s.insert("dfs", Box::new(commands::dfs));
        s.insert("astar", Box::new(commands::astar));
        s.insert("dijkstra", Box::new(commands::shortest_paths));
        s.insert("mst", Box::new(commands::spanning_tree));
        s
    };
}

pub fn solver() -> Result<(), Error> {
    let matches = App::new("graphsearch")
        .version("0.1")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Search and shortest paths over weighted edge lists")
        .arg(
            Arg::with_name("algorithm")
                .value_name("ALGORITHM")
                .required(true)
                .possible_values(&ALGORITHMS)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("input")
                .value_name("INPUT")
                .help("Edge list to read, or - for stdin")
                .required(false)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("from")
                .long("from")
                .value_name("VERTEX")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("to")
                .long("to")
                .value_name("VERTEX")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("step-limit")
                .long("step-limit")
                .value_name("STEPS")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more detail to stderr"),
        )
        .get_matches();

    logging::init_tracing(matches.occurrences_of("verbose"))?;

    let algorithm = matches
        .value_of("algorithm")
        .ok_or(CliError::MissingArgument("ALGORITHM"))?;
    let network = Network::read(get_input_reader(matches.value_of("input"))?)?;

    let mut query = Query::new(matches.value_of("from"), matches.value_of("to"));
    if matches.is_present("step-limit") {
        query.options.step_limit = Some(value_t!(matches, "step-limit", usize)?);
    }

    print!("{}", run(algorithm, &network, &query)?);
    Ok(())
}

/// Run one named algorithm and return its report.
pub fn run(algorithm: &str, network: &Network, query: &Query) -> Result<String, Error> {
    match COMMANDS.get(algorithm) {
        None => Err(CliError::UnknownAlgorithm(algorithm.to_string()).into()),
        Some(command) => command(network, query),
    }
}

type BoxedRead = Box<dyn ::std::io::Read + 'static>;

pub fn get_input_reader(filename: Option<&str>) -> Result<BoxedRead, Error> {
    let reader: BoxedRead = match filename {
        None | Some("-") => Box::new(::std::io::stdin()),
        Some(path) => {
            let f: File = File::open(path).map_err(|e| CliError::InputNotFound(path.to_string(), e))?;
            Box::new(f)
        }
    };
    Ok(reader)
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("No algorithm named {0}")]
    UnknownAlgorithm(String),

    #[error("Missing required argument {0}")]
    MissingArgument(&'static str),

    #[error("Input not found: {0}")]
    InputNotFound(String, #[source] io::Error),

    #[error("Line {0} is not an edge: {1:?}")]
    ParseLine(usize, String),

    #[error("Line {0} has a negative weight {1}")]
    NegativeWeight(usize, f64),

    #[error("Graph has no vertices")]
    EmptyGraph,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_algorithm_has_a_command() {
        for name in ALGORITHMS.iter() {
            assert!(COMMANDS.contains_key(name), "{}", name);
        }
    }

    #[test]
    fn dispatch() {
        let network: Network = "A B 1\nB C 1\n".parse().unwrap();
        let query = Query::new(Some("A"), Some("C"));
        assert_eq!(
            run("bfs", &network, &query).unwrap(),
            "Path from A to C (2 steps):\nA -> B -> C\n"
        );

        let err = run("greedy", &network, &query).unwrap_err();
        match err.downcast_ref::<CliError>() {
            Some(CliError::UnknownAlgorithm(name)) => assert_eq!(name, "greedy"),
            other => panic!("Unexpected error {:?}", other),
        }
    }

    #[test]
    fn missing_input() {
        let err = get_input_reader(Some("no/such/file.txt")).err().unwrap();
        match err.downcast_ref::<CliError>() {
            Some(CliError::InputNotFound(path, _)) => assert_eq!(path, "no/such/file.txt"),
            other => panic!("Unexpected error {:?}", other),
        }
    }

    #[test]
    fn stdin_reader() {
        assert!(get_input_reader(None).is_ok());
        assert!(get_input_reader(Some("-")).is_ok());
    }

    #[test]
    fn file_reader() {
        let path = std::env::temp_dir().join(format!("graphsearch-{}.txt", std::process::id()));
        std::fs::write(&path, "A B 1\nB C 3\n").unwrap();

        let network = Network::read(get_input_reader(path.to_str()).unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();

        let report = run("dijkstra", &network, &Query::new(Some("A"), None)).unwrap();
        assert_eq!(report, "Distances from A:\nA: 0\nB: 1\nC: 4\n");
    }
}
