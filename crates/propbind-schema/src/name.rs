use crate::BINDING_SUFFIX;
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

///
/// QualifiedName
///
/// A type path split into segments. Accepts `::` and `.` separators and
/// displays with the one it was parsed from; equality ignores the separator.
///

#[derive(Clone, Debug)]
pub struct QualifiedName {
    segments: Vec<String>,
    dotted: bool,
}

impl QualifiedName {
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let dotted = !text.contains("::") && text.contains('.');
        let separator = if dotted { "." } else { "::" };

        Self {
            segments: text
                .split(separator)
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(ToString::to_string)
                .collect(),
            dotted,
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    /// Same path with `Binding` appended to the last segment.
    #[must_use]
    pub fn binding(&self) -> Self {
        let mut segments = self.segments.clone();
        if let Some(last) = segments.last_mut() {
            last.push_str(BINDING_SUFFIX);
        }

        Self {
            segments,
            dotted: self.dotted,
        }
    }

    /// The path joined with `::`, whatever it was parsed from.
    #[must_use]
    pub fn rust_path(&self) -> String {
        self.segments.join("::")
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.dotted { "." } else { "::" };

        f.write_str(&self.segments.join(separator))
    }
}

impl From<&str> for QualifiedName {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl PartialEq for QualifiedName {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for QualifiedName {}

impl Hash for QualifiedName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.segments.hash(state);
    }
}

impl PartialOrd for QualifiedName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QualifiedName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.segments.cmp(&other.segments)
    }
}

///
/// TESTS
///
