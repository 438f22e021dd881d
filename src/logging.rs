use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter directives in this variable replace the `-v` flags entirely.
pub const LOG_ENV: &str = "GRAPHSEARCH_LOG";

fn directive(verbosity: u64) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    format!("searcher={level},graphsearch={level}", level = level)
}

/// Install a compact stderr subscriber for the command line tool.
pub fn init_tracing(verbosity: u64) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(directive(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_ansi(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;
    Ok(())
}
