use crate::{name::QualifiedName, node::Member, prelude::*};

///
/// TypeDescriptor
///
/// One type of the inventory: its path, generic parameters, supertypes and
/// declared members. Types with `bindable = false` only contribute members
/// to their subtypes.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TypeDescriptor {
    pub path: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<TypeParam>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supertypes: Vec<String>,

    #[serde(default)]
    pub members: Vec<Member>,

    #[serde(default = "default_bindable")]
    pub bindable: bool,
}

const fn default_bindable() -> bool {
    true
}

impl TypeDescriptor {
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            type_params: Vec::new(),
            supertypes: Vec::new(),
            members: Vec::new(),
            bindable: true,
        }
    }

    #[must_use]
    pub fn name(&self) -> QualifiedName {
        QualifiedName::parse(&self.path)
    }

    #[must_use]
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    #[must_use]
    pub fn with_supertype(mut self, path: &str) -> Self {
        self.supertypes.push(path.to_string());
        self
    }

    #[must_use]
    pub fn with_type_param(mut self, param: TypeParam) -> Self {
        self.type_params.push(param);
        self
    }

    #[must_use]
    pub const fn not_bindable(mut self) -> Self {
        self.bindable = false;
        self
    }
}

///
/// TypeParam
///
/// A generic parameter with its bounds kept verbatim. Deserializes from a
/// bare name too.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(from = "TypeParamRepr")]
pub struct TypeParam {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bounds: Vec<String>,
}

impl TypeParam {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            bounds: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_bound(mut self, bound: &str) -> Self {
        self.bounds.push(bound.to_string());
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TypeParamRepr {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        bounds: Vec<String>,
    },
}

impl From<TypeParamRepr> for TypeParam {
    fn from(repr: TypeParamRepr) -> Self {
        match repr {
            TypeParamRepr::Name(name) => Self {
                name,
                bounds: Vec::new(),
            },
            TypeParamRepr::Full { name, bounds } => Self { name, bounds },
        }
    }
}
