use crate::prelude::*;
use std::collections::BTreeSet;

///
/// Member
///
/// A field or method as the inventory reports it. `ty` is the field type or
/// the method's return type.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Member {
    pub name: String,
    pub kind: MemberKind,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub modifiers: BTreeSet<Modifier>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,

    #[serde(default)]
    pub ty: TypeRef,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<TypeRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub throws: Vec<TypeRef>,

    /// Supertype distance from the type being generated; set by the closure.
    #[serde(skip)]
    pub depth: usize,
}

///
/// Signature
///
/// What makes two members the same member across a supertype chain.
///

#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Signature {
    pub name: String,
    pub kind: MemberKind,
    pub params: Vec<TypeRef>,
}

impl Member {
    #[must_use]
    pub fn new(kind: MemberKind, name: &str, ty: TypeRef) -> Self {
        Self {
            name: name.to_string(),
            kind,
            modifiers: BTreeSet::new(),
            deprecated: false,
            ty,
            params: Vec::new(),
            throws: Vec::new(),
            depth: 0,
        }
    }

    // field
    #[must_use]
    pub fn field(name: &str, ty: &str) -> Self {
        Self::new(MemberKind::Field, name, TypeRef::parse(ty))
    }

    // method
    #[must_use]
    pub fn method(name: &str, ret: &str) -> Self {
        Self::new(MemberKind::Method, name, TypeRef::parse(ret))
    }

    #[must_use]
    pub fn public(self) -> Self {
        self.with_modifier(Modifier::Public)
    }

    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    #[must_use]
    pub fn with_param(mut self, ty: &str) -> Self {
        self.params.push(TypeRef::parse(ty));
        self
    }

    #[must_use]
    pub fn with_throws(mut self, ty: &str) -> Self {
        self.throws.push(TypeRef::parse(ty));
        self
    }

    #[must_use]
    pub const fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    #[must_use]
    pub fn is_public(&self) -> bool {
        self.modifiers.contains(&Modifier::Public)
    }

    #[must_use]
    pub fn is_static(&self) -> bool {
        self.modifiers.contains(&Modifier::Static)
    }

    #[must_use]
    pub const fn is_field(&self) -> bool {
        matches!(self.kind, MemberKind::Field)
    }

    #[must_use]
    pub const fn is_method(&self) -> bool {
        matches!(self.kind, MemberKind::Method)
    }

    /// Public, non-static method taking exactly one parameter.
    #[must_use]
    pub fn is_unary_instance_method(&self) -> bool {
        self.is_method() && self.is_public() && !self.is_static() && self.params.len() == 1
    }

    #[must_use]
    pub fn signature(&self) -> Signature {
        Signature {
            name: self.name.clone(),
            kind: self.kind,
            params: self.params.clone(),
        }
    }
}

///
/// TESTS
///
