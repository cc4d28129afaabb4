use reaction_fetcher::{run, API_ROOT, DEFAULT_CONFIG_PATH};
use std::io;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    run(Path::new(DEFAULT_CONFIG_PATH), API_ROOT, &mut stdout.lock()).into()
}
