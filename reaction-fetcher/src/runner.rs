use crate::client::Client;
use crate::config::Config;
use crate::error::{Context, Result};
use crate::fetcher::fetch_reactions;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    FetchFailed,
    InvalidConfig,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::FetchFailed => 1,
            Status::InvalidConfig => 2,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

/// Loads and validates the config at `config_path`, fetches the reactors and
/// writes their ids to `out` as a JSON array.
pub fn run<W: Write>(config_path: &Path, api_root: &str, out: &mut W) -> Status {
    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, path = %config_path.display(), "Invalid configuration");
            return Status::InvalidConfig;
        }
    };

    let ids = match execute(&config, api_root) {
        Ok(ids) => ids,
        Err(e) => {
            error!(error = %e, "Error fetching reactions");
            return Status::FetchFailed;
        }
    };

    info!(count = ids.len(), "Reactions fetched successfully");

    if let Err(e) = write_ids(out, &ids) {
        error!(error = %e, "Error writing reactions");
        return Status::FetchFailed;
    }

    Status::Success
}

pub fn load_config(path: &Path) -> Result<Config> {
    let config = Config::load(path)?;
    config.validate()?;
    Ok(config)
}

pub fn execute(config: &Config, api_root: &str) -> Result<Vec<String>> {
    let client =
        Client::new(config, config.base_url(api_root)).context("failed to build HTTP client")?;

    info!(base_url = client.base_url(), timeout = ?config.timeout(), "Fetching reactions");
    fetch_reactions(&client, config)
}

fn write_ids<W: Write>(out: &mut W, ids: &[String]) -> Result<()> {
    serde_json::to_writer(&mut *out, ids).context("failed to write output")?;
    writeln!(out).context("failed to write output")
}
