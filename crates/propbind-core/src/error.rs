use thiserror::Error as ThisError;

///
/// BindingError
///
/// Failures raised while walking a binding path. Every variant carries the
/// dotted path of the segment that caused it.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum BindingError {
    #[error("path segment '{path}' is absent")]
    Absent { path: String },

    #[error("binding '{path}' is read-only")]
    ReadOnly { path: String },

    #[error("binding '{path}' is not attached to a root value")]
    Unbound { path: String },
}

impl BindingError {
    pub(crate) fn absent(path: &str) -> Self {
        Self::Absent {
            path: path.to_string(),
        }
    }

    pub(crate) fn read_only(path: &str) -> Self {
        Self::ReadOnly {
            path: path.to_string(),
        }
    }

    pub(crate) fn unbound(path: &str) -> Self {
        Self::Unbound {
            path: path.to_string(),
        }
    }

    /// Dotted path of the offending segment.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Absent { path } | Self::ReadOnly { path } | Self::Unbound { path } => path,
        }
    }
}
