use crate::error::ConfigError;
use derive_more::Display;
use propbind_schema::skip::SkipPolicy;
use serde::{Deserialize, Serialize};
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};
use toml::{Table, Value};

/// Config file looked up next to the manifest of the crate being built.
pub const CONFIG_FILE: &str = "propbind.toml";

///
/// FluentSetterMatch
///
/// How a fluent setter `foo(v)` is matched to its getter `foo()`.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FluentSetterMatch {
    /// The single parameter must be exactly the getter's return type.
    #[default]
    Exact,

    /// Any one-parameter method of the same name.
    Named,
}

///
/// Options
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    pub fluent_setter: FluentSetterMatch,
}

///
/// Config
///
/// Generator options plus the skip rules. Every key of the TOML document is
/// flattened by joining nested tables with `.`, so both
/// `skipAttribute.Example.name = true` and a quoted
/// `"skipAttribute.crate::model::Customer.internal" = true` name a rule.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    pub options: Options,
    pub skip: SkipPolicy,
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let table: Table = toml::from_str(text)?;

        let options = match table.get("options") {
            Some(value) => value.clone().try_into::<Options>()?,
            None => Options::default(),
        };

        let mut entries = Vec::new();
        flatten("", &table, &mut entries);

        Ok(Self {
            options,
            skip: SkipPolicy::from_entries(entries),
        })
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load `propbind.toml` from `$CARGO_MANIFEST_DIR`.
    pub fn from_manifest_dir() -> Result<Self, ConfigError> {
        let dir = env::var_os("CARGO_MANIFEST_DIR").map_or_else(PathBuf::new, PathBuf::from);

        Self::load(dir.join(CONFIG_FILE))
    }

    #[must_use]
    pub fn with_skip(mut self, skip: &SkipPolicy) -> Self {
        self.skip = self.skip.merged(skip);
        self
    }
}

fn flatten(prefix: &str, table: &Table, out: &mut Vec<(String, String)>) {
    for (key, value) in table {
        let key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match value {
            Value::Table(inner) => flatten(&key, inner, out),
            Value::String(text) => out.push((key, text.clone())),
            other => out.push((key, other.to_string())),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_options_and_skip_rules() {
        let config = Config::from_toml_str(
            r#"
            "skipAttribute.crate::model::Customer.internal" = true

            [options]
            fluent_setter = "named"

            [skipAttribute.Example]
            name = true
            size = "true"
            kind = false
            "#,
        )
        .unwrap();

        assert_eq!(config.options.fluent_setter, FluentSetterMatch::Named);
        assert!(config.skip.skips("Example", "name"));
        assert!(config.skip.skips("Example", "size"));
        assert!(!config.skip.skips("Example", "kind"));
        assert!(config.skip.skips("crate::model::Customer", "internal"));
    }

    #[test]
    fn dotted_type_names_flatten_back() {
        let config = Config::from_toml_str("skipAttribute.org.example.Foo.bar = true").unwrap();

        assert!(config.skip.skips("org.example.Foo", "bar"));
        assert_eq!(config.options, Options::default());
    }

    #[test]
    fn unknown_options_are_errors() {
        let err = Config::from_toml_str("[options]\nfluent = \"exact\"").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_the_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join(CONFIG_FILE)).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[options]\nfluent_setter = \"exact\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.options.fluent_setter, FluentSetterMatch::Exact);
    }
}
