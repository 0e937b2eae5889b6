use std::{io, path::PathBuf};
use thiserror::Error as ThisError;

///
/// InventoryError
///

#[derive(Debug, ThisError)]
pub enum InventoryError {
    #[error("invalid inventory: {}", .0.join("; "))]
    Invalid(Vec<String>),

    #[error("cannot parse inventory: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot read inventory {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
}
