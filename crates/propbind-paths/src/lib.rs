use proc_macro2::TokenStream;
use quote::quote;
use syn::Path;

/// Environment variable overriding the path generated code uses for the
/// binding runtime.
pub const CORE_CRATE_ENV: &str = "PROPBIND_CORE_CRATE";

const INTERNAL_CRATES: &[&str] = &[
    "propbind",
    "propbind-build",
    "propbind-core",
    "propbind-derive",
    "propbind-paths",
    "propbind-schema",
];

fn parse_path(value: &str) -> Option<TokenStream> {
    syn::parse_str::<Path>(value.trim())
        .ok()
        .map(|path| quote!(#path))
}

///
/// CratePaths
///
/// Where generated bindings find `propbind-core`. Crates inside this
/// workspace name the runtime crate directly; everything else goes through
/// the `propbind` facade. `PROPBIND_CORE_CRATE` overrides both.
///

#[derive(Clone, Debug)]
pub struct CratePaths {
    pub core: TokenStream,
}

impl CratePaths {
    /// Resolve from the current `CARGO_PKG_NAME` and environment override.
    #[must_use]
    pub fn new() -> Self {
        let package = std::env::var("CARGO_PKG_NAME").unwrap_or_default();
        let core_override = std::env::var(CORE_CRATE_ENV).ok();

        Self::resolve(&package, core_override.as_deref())
    }

    #[must_use]
    pub fn resolve(package: &str, core_override: Option<&str>) -> Self {
        let default = if INTERNAL_CRATES.contains(&package) {
            quote!(::propbind_core)
        } else {
            quote!(::propbind::core)
        };

        Self {
            core: core_override.and_then(parse_path).unwrap_or(default),
        }
    }
}

impl Default for CratePaths {
    fn default() -> Self {
        Self::new()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_crates_use_the_runtime_directly() {
        let paths = CratePaths::resolve("propbind-core", None);

        assert_eq!(paths.core.to_string(), quote!(::propbind_core).to_string());
    }

    #[test]
    fn external_crates_use_the_facade() {
        let paths = CratePaths::resolve("my-app", None);

        assert_eq!(paths.core.to_string(), quote!(::propbind::core).to_string());
    }

    #[test]
    fn override_wins_when_it_parses() {
        let paths = CratePaths::resolve("my-app", Some(" vendored::bindings "));
        assert_eq!(paths.core.to_string(), quote!(vendored::bindings).to_string());

        let paths = CratePaths::resolve("my-app", Some("not a path"));
        assert_eq!(paths.core.to_string(), quote!(::propbind::core).to_string());
    }
}
