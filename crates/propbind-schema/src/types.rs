use crate::{BINDING_SUFFIX, prelude::*};
use derive_more::Display;
use quote::ToTokens;
use std::fmt;
use syn::{GenericArgument, PathArguments, Type};

///
/// Modifier
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[remain::sorted]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    Abstract,
    Final,
    Private,
    Protected,
    Public,
    Static,
}

///
/// MemberKind
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Field,
    Method,
}

///
/// TypeRef
///
/// A type reference as written in the inventory. Serialized as source text.
///
/// Dotted paths (`java.util.List`) are read as `::`-separated paths so both
/// spellings name the same type.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(from = "String", into = "String")]
pub enum TypeRef {
    Named {
        path: String,
        args: Vec<TypeRef>,
    },
    Opaque(String),
    Unresolved(String),
    #[default]
    Void,
}

const OPTION_PATHS: [&str; 3] = ["Option", "std::option::Option", "core::option::Option"];

impl TypeRef {
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() || text == "void" || text == "()" {
            return Self::Void;
        }

        match syn::parse_str::<Type>(&text.replace('.', "::")) {
            Ok(ty) => Self::from(&ty),
            Err(_) => Self::Unresolved(text.to_string()),
        }
    }

    #[must_use]
    pub fn named(path: &str) -> Self {
        Self::Named {
            path: path.to_string(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved(_))
    }

    /// The type without its generic arguments.
    #[must_use]
    pub fn erasure(&self) -> &str {
        match self {
            Self::Named { path, .. } => path,
            Self::Opaque(text) | Self::Unresolved(text) => text,
            Self::Void => "()",
        }
    }

    /// Last path segment of the erasure.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        let erasure = self.erasure();
        erasure.rsplit("::").next().unwrap_or(erasure)
    }

    /// Whether this is already a binding type and must never be wrapped again.
    #[must_use]
    pub fn is_binding(&self) -> bool {
        self.erasure().ends_with(BINDING_SUFFIX)
    }

    /// Like [`TypeRef::is_binding`] but looking through `Option`, which is
    /// bound as its inner type.
    #[must_use]
    pub fn is_binding_leaf(&self) -> bool {
        self.optional_inner().unwrap_or(self).is_binding()
    }

    /// The wrapped type when this is an `Option<X>`.
    #[must_use]
    pub fn optional_inner(&self) -> Option<&Self> {
        match self {
            Self::Named { path, args } if args.len() == 1 && OPTION_PATHS.contains(&path.as_str()) => {
                args.first()
            }
            _ => None,
        }
    }

    /// Whether this is a boolean in any of the accepted spellings.
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(
            self.erasure(),
            "bool" | "boolean" | "Boolean" | "java::lang::Boolean"
        )
    }

    pub fn to_syn(&self) -> Result<Type, syn::Error> {
        syn::parse_str::<Type>(&self.to_string())
    }
}

impl From<&Type> for TypeRef {
    fn from(ty: &Type) -> Self {
        match ty {
            Type::Tuple(tuple) if tuple.elems.is_empty() => Self::Void,
            Type::Paren(paren) => Self::from(&*paren.elem),
            Type::Group(group) => Self::from(&*group.elem),
            Type::Path(type_path) if type_path.qself.is_none() => {
                let segments = &type_path.path.segments;
                let inner_args = segments
                    .iter()
                    .take(segments.len().saturating_sub(1))
                    .any(|segment| !segment.arguments.is_none());
                if inner_args {
                    return Self::Opaque(ty.to_token_stream().to_string());
                }

                let mut path = segments
                    .iter()
                    .map(|segment| segment.ident.to_string())
                    .collect::<Vec<_>>()
                    .join("::");
                if type_path.path.leading_colon.is_some() {
                    path.insert_str(0, "::");
                }

                let args = match segments.last().map(|segment| &segment.arguments) {
                    None | Some(PathArguments::None) => Vec::new(),
                    Some(PathArguments::AngleBracketed(generics)) => {
                        let mut args = Vec::new();
                        for arg in &generics.args {
                            match arg {
                                GenericArgument::Type(arg) => args.push(Self::from(arg)),
                                _ => return Self::Opaque(ty.to_token_stream().to_string()),
                            }
                        }
                        args
                    }
                    Some(PathArguments::Parenthesized(_)) => {
                        return Self::Opaque(ty.to_token_stream().to_string());
                    }
                };

                Self::Named { path, args }
            }
            other => Self::Opaque(other.to_token_stream().to_string()),
        }
    }
}

impl From<String> for TypeRef {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<TypeRef> for String {
    fn from(ty: TypeRef) -> Self {
        ty.to_string()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named { path, args } => {
                f.write_str(path)?;
                if !args.is_empty() {
                    let args = args.iter().map(ToString::to_string).collect::<Vec<_>>();
                    write!(f, "<{}>", args.join(", "))?;
                }

                Ok(())
            }
            Self::Opaque(text) | Self::Unresolved(text) => f.write_str(text),
            Self::Void => f.write_str("()"),
        }
    }
}

///
/// TESTS
///
