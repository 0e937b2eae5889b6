use propbind_schema::error::InventoryError;
use std::{io, path::PathBuf};
use thiserror::Error as ThisError;

///
/// BuildError
///
/// Failures that stop one type (or the whole batch, for configuration and
/// inventory problems). Member-level problems are rejections, not errors.
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("binding file '{file}' is already written by '{owner}'")]
    DuplicateFile { file: String, owner: String },

    #[error("duplicate binding property '{property}' on '{ty}'")]
    DuplicateProperty { ty: String, property: String },

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("invalid type path '{path}'")]
    InvalidPath { path: String },

    #[error("invalid type parameter '{param}' on '{ty}': {reason}")]
    InvalidTypeParam {
        ty: String,
        param: String,
        reason: String,
    },
}

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
}

///
/// EmitError
///

#[derive(Debug, ThisError)]
pub enum EmitError {
    #[error("cannot write binding {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
}
