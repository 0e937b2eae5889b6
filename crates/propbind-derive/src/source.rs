use propbind_schema::{
    name::QualifiedName, node::TypeDescriptor, source::MemberSource,
};
use std::collections::BTreeSet;

///
/// DeriveSource
///
/// The single struct a derive sees. Leaf types are only bindable when a
/// field marks them `nested`, since nothing else is known about them.
///

pub struct DeriveSource {
    ty: TypeDescriptor,
    nested: BTreeSet<QualifiedName>,
}

impl DeriveSource {
    pub const fn new(ty: TypeDescriptor, nested: BTreeSet<QualifiedName>) -> Self {
        Self { ty, nested }
    }

    pub const fn ty(&self) -> &TypeDescriptor {
        &self.ty
    }
}

impl MemberSource for DeriveSource {
    fn descriptor(&self, name: &QualifiedName) -> Option<&TypeDescriptor> {
        (self.ty.name() == *name).then_some(&self.ty)
    }

    fn bindable_types(&self) -> Vec<&TypeDescriptor> {
        vec![&self.ty]
    }

    fn is_bindable(&self, name: &QualifiedName) -> bool {
        self.nested.contains(name)
    }
}
