mod config;
pub use config::{Config, API_ROOT, DEFAULT_CONFIG_PATH, DEFAULT_TIMEOUT_SECS};

mod error;
pub use error::{Context, Error, ErrorKind, Result};

mod client;
pub use client::Client;

pub mod fetcher;
pub use fetcher::{fetch_reactions, ReactionSource};

pub mod runner;
pub use runner::{run, Status};
