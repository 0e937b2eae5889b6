//! Pure naming transforms between members, properties and generated items.

use convert_case::{Case, Casing};
use propbind_schema::name::QualifiedName;
use std::{collections::HashSet, sync::LazyLock};

pub const GET_PREFIX: &str = "get";
pub const IS_PREFIX: &str = "is";
pub const SET_PREFIX: &str = "set";

/// Suffix given to accessors whose name is taken.
pub const RESERVED_SUFFIX: &str = "_property";

///
/// RESERVED_WORDS
/// rust keywords plus every method a generated binding already has
///

static RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut words = Vec::new();

    // rust
    // https://doc.rust-lang.org/reference/keywords.html
    words.extend([
        "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn",
        "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
        "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
        "unsafe", "use", "where", "while", "async", "await", "dyn", "abstract", "become", "box",
        "do", "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
    ]);

    // binding
    words.extend([
        "callable",
        "clone",
        "default",
        "deref",
        "from_path",
        "get",
        "get_safely_with_root",
        "get_with_root",
        "into_path",
        "invoke",
        "invoke_with_root",
        "is_standalone",
        "name",
        "new",
        "parent",
        "path",
        "root_binding",
        "set",
        "set_with_root",
        "then",
        "type_name",
        "with_value",
    ]);

    words.into_iter().collect()
});

/// Whether `word` cannot be used as a generated accessor name.
#[must_use]
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(word)
}

/// `Name` -> `name`; leaves the rest untouched.
#[must_use]
pub fn uncapitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `name` -> `Name`; leaves the rest untouched.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// a prefix only counts when the rest starts a new word: `isOpen`, `is_open`
fn starts_word(rest: &str) -> bool {
    rest.chars().next().is_some_and(|c| c == '_' || c.is_uppercase())
}

// strip a prefix plus an optional single `_` separator
fn strip_accessor_prefix<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = name.strip_prefix(prefix)?;
    let rest = rest.strip_prefix('_').unwrap_or(rest);

    (!rest.is_empty()).then_some(rest)
}

/// Property named by a `get` method: `getFirstName` -> `firstName`,
/// `get_first_name` -> `first_name`. `None` without the prefix.
#[must_use]
pub fn derive_getter_property_name(method: &str) -> Option<String> {
    strip_accessor_prefix(method, GET_PREFIX).map(uncapitalize)
}

/// Property named by an `is` method: `isOpen` -> `open`, `is_open` -> `open`.
/// The prefix must end at a word boundary, so `issue` names nothing.
#[must_use]
pub fn derive_is_property_name(method: &str) -> Option<String> {
    if starts_word(method.strip_prefix(IS_PREFIX)?) {
        strip_accessor_prefix(method, IS_PREFIX).map(uncapitalize)
    } else {
        None
    }
}

/// Setter expected for a getter: `getName` -> `setName`,
/// `get_name` -> `set_name`.
#[must_use]
pub fn setter_name_for(getter: &str, property: &str) -> String {
    let snake = getter
        .strip_prefix(GET_PREFIX)
        .or_else(|| getter.strip_prefix(IS_PREFIX))
        .is_some_and(|rest| rest.starts_with('_'));

    if snake {
        format!("{SET_PREFIX}_{property}")
    } else {
        format!("{SET_PREFIX}{}", capitalize(property))
    }
}

/// Whether a method name carries an accessor prefix. `get` is literal and
/// needs something after it; `set` and `is` must start a new word, so
/// `settings` and `isbn` are plain names.
#[must_use]
pub fn has_accessor_prefix(name: &str) -> bool {
    let literal = name.len() > GET_PREFIX.len() && name.starts_with(GET_PREFIX);

    literal
        || [SET_PREFIX, IS_PREFIX]
            .iter()
            .any(|prefix| name.strip_prefix(*prefix).is_some_and(starts_word))
}

/// Generated accessor for a property: snake case, suffixed when reserved.
#[must_use]
pub fn accessor_name(property: &str) -> String {
    let snake = property.to_case(Case::Snake);

    if is_reserved_word(&snake) {
        format!("{snake}{RESERVED_SUFFIX}")
    } else {
        snake
    }
}

/// File a binding is written to: `crate::geo::PointBinding` ->
/// `geo_point_binding.rs`.
#[must_use]
pub fn file_name_for(binding: &QualifiedName) -> String {
    let segments = binding
        .segments()
        .iter()
        .skip_while(|segment| matches!(segment.as_str(), "crate" | "self" | "super"))
        .map(|segment| segment.to_case(Case::Snake))
        .collect::<Vec<_>>();

    format!("{}.rs", segments.join("_"))
}

///
/// TESTS
///
