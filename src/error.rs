use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("fighter index {index} out of range (roster has {len})")]
    OutOfRange { index: usize, len: usize },
    #[error("no fighter matches '{0}'")]
    NotFound(String),
    #[error("failed to read roster {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid roster json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid roster yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum FightError {
    #[error("a fight needs at least one round")]
    NoRounds,
    #[error("no entropy source for an unseeded fight: {0}")]
    Entropy(#[from] getrandom::Error),
}
