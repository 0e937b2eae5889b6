//! Generates `<Type>Binding` source from a member inventory, either for a
//! whole inventory from a build script (`build!`) or one type at a time for
//! the derive macro.

pub mod builder;
pub mod classify;
pub mod config;
pub mod error;
pub mod generator;
mod macros;
pub mod naming;
pub mod render;
pub mod sink;

use crate::{
    builder::BindingTreeBuilder,
    config::Config,
    error::BuildError,
    naming::file_name_for,
    render::render,
    sink::{Artifact, EmissionSink, FileSink},
};
use derive_more::Display;
use proc_macro2::TokenStream;
use propbind_paths::CratePaths;
use propbind_schema::{
    inventory::Inventory, name::QualifiedName, node::TypeDescriptor, source::MemberSource,
};
use std::{collections::BTreeMap, path::Path};
use tracing::{error, info, warn};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Diagnostic, Generator, Report,
        builder::{BindingClass, BindingTreeBuilder},
        classify::{Classifier, Rejection, Shape},
        config::{Config, FluentSetterMatch, Options},
        error::{BuildError, ConfigError, EmitError},
        sink::{Artifact, EmissionSink, FileSink, MemorySink},
    };
}

///
/// Diagnostic
///
/// A type whose binding could not be generated or emitted.
///

#[derive(Clone, Debug, Display, Eq, PartialEq)]
#[display("{ty}: {message}")]
pub struct Diagnostic {
    pub ty: String,
    pub message: String,
}

///
/// Report
///

#[derive(Clone, Debug, Default)]
pub struct Report {
    pub generated: Vec<QualifiedName>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

///
/// Generator
///
/// Runs one generation pass per bindable type of a member source. A type
/// that fails is reported and its siblings still generate.
///

pub struct Generator<'a> {
    source: &'a dyn MemberSource,
    config: &'a Config,
    paths: CratePaths,
}

impl<'a> Generator<'a> {
    #[must_use]
    pub fn new(source: &'a dyn MemberSource, config: &'a Config) -> Self {
        Self {
            source,
            config,
            paths: CratePaths::new(),
        }
    }

    #[must_use]
    pub fn with_paths(mut self, paths: CratePaths) -> Self {
        self.paths = paths;
        self
    }

    /// Binding source tokens for one type.
    pub fn tokens(&self, ty: &TypeDescriptor) -> Result<TokenStream, BuildError> {
        let class = BindingTreeBuilder::new(self.source, self.config).build(ty)?;

        Ok(render(&class, &self.paths.core))
    }

    pub fn artifact(&self, ty: &TypeDescriptor) -> Result<Artifact, BuildError> {
        let binding = ty.name().binding();

        Ok(Artifact {
            file_name: file_name_for(&binding),
            source: self.tokens(ty)?.to_string(),
            qualified_name: binding,
        })
    }

    pub fn run(&self, sink: &mut dyn EmissionSink) -> Report {
        let types = self.source.bindable_types();
        info!(types = types.len(), "binding generation started");

        let mut report = Report::default();
        let mut written: BTreeMap<String, QualifiedName> = BTreeMap::new();
        for ty in types {
            let artifact = match self
                .artifact(ty)
                .and_then(|artifact| claim_file(&mut written, artifact))
            {
                Ok(artifact) => artifact,
                Err(err) => {
                    warn!(ty = %ty.path, error = %err, "binding not generated");
                    report.diagnostics.push(Diagnostic {
                        ty: ty.path.clone(),
                        message: err.to_string(),
                    });
                    continue;
                }
            };

            match sink.emit(&artifact) {
                Ok(()) => report.generated.push(artifact.qualified_name),
                Err(err) => {
                    error!(ty = %ty.path, error = %err, "binding not emitted");
                    report.diagnostics.push(Diagnostic {
                        ty: ty.path.clone(),
                        message: err.to_string(),
                    });
                }
            }
        }

        info!(
            generated = report.generated.len(),
            failed = report.diagnostics.len(),
            "binding generation finished"
        );

        report
    }
}

/// Generate bindings for every type of a JSON inventory into `out_dir`,
/// configured by the TOML file at `config` (missing means defaults).
pub fn generate_dir(
    inventory: impl AsRef<Path>,
    config: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
) -> Result<Report, BuildError> {
    let inventory = Inventory::from_json_file(inventory)?;
    let config = Config::load(config)?;
    let mut sink = FileSink::new(out_dir);

    Ok(Generator::new(&inventory, &config).run(&mut sink))
}

// claim_file
// distinct bindings whose file names coincide would overwrite each other
fn claim_file(
    written: &mut BTreeMap<String, QualifiedName>,
    artifact: Artifact,
) -> Result<Artifact, BuildError> {
    if let Some(owner) = written.get(&artifact.file_name) {
        return Err(BuildError::DuplicateFile {
            file: artifact.file_name,
            owner: owner.to_string(),
        });
    }
    written.insert(artifact.file_name.clone(), artifact.qualified_name.clone());

    Ok(artifact)
}

///
/// TESTS
///
