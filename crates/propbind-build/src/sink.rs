use crate::error::EmitError;
use propbind_schema::name::QualifiedName;
use std::{
    fs,
    path::{Path, PathBuf},
};

///
/// Artifact
///
/// Generated source for one binding.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Artifact {
    pub qualified_name: QualifiedName,
    pub file_name: String,
    pub source: String,
}

///
/// EmissionSink
///

pub trait EmissionSink {
    fn emit(&mut self, artifact: &Artifact) -> Result<(), EmitError>;
}

///
/// FileSink
///
/// Writes one file per binding into a directory, creating it on first use.
///

#[derive(Clone, Debug)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl EmissionSink for FileSink {
    fn emit(&mut self, artifact: &Artifact) -> Result<(), EmitError> {
        let path = self.dir.join(&artifact.file_name);

        fs::create_dir_all(&self.dir)
            .and_then(|()| fs::write(&path, &artifact.source))
            .map_err(|source| EmitError::Io { path, source })
    }
}

///
/// MemorySink
///

#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    artifacts: Vec<Artifact>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    #[must_use]
    pub fn get(&self, qualified_name: &str) -> Option<&Artifact> {
        let name = QualifiedName::parse(qualified_name);

        self.artifacts
            .iter()
            .find(|artifact| artifact.qualified_name == name)
    }
}

impl EmissionSink for MemorySink {
    fn emit(&mut self, artifact: &Artifact) -> Result<(), EmitError> {
        self.artifacts.push(artifact.clone());

        Ok(())
    }
}

///
/// TESTS
///
