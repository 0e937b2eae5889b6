use crate::prelude::*;
use std::collections::{BTreeSet, VecDeque};

///
/// MemberSource
///
/// Where the generator learns about types. The inventory loaded from JSON is
/// one source; the derive macro's view of a single struct is another.
///

pub trait MemberSource {
    fn descriptor(&self, name: &QualifiedName) -> Option<&TypeDescriptor>;

    /// Every type a binding should be generated for, in a stable order.
    fn bindable_types(&self) -> Vec<&TypeDescriptor>;

    /// Whether a leaf of this type gets a nested binding.
    fn is_bindable(&self, name: &QualifiedName) -> bool {
        self.descriptor(name).is_some_and(|ty| ty.bindable)
    }

    /// The full member closure of `ty`.
    fn list_members(&self, ty: &TypeDescriptor) -> Vec<Member> {
        member_closure(self, ty)
    }
}

/// Own members first, then supertypes breadth first. A member already seen
/// under the same signature is hidden by the more derived declaration.
/// Unknown supertypes contribute nothing and cycles are visited once.
pub fn member_closure<'a, S>(source: &'a S, ty: &'a TypeDescriptor) -> Vec<Member>
where
    S: MemberSource + ?Sized,
{
    let mut members = Vec::new();
    let mut signatures = BTreeSet::new();
    let mut visited = BTreeSet::from([ty.name()]);
    let mut queue = VecDeque::from([(ty, 0_usize)]);

    while let Some((current, depth)) = queue.pop_front() {
        for member in &current.members {
            if signatures.insert(member.signature()) {
                let mut member = member.clone();
                member.depth = depth;
                members.push(member);
            }
        }

        for supertype in &current.supertypes {
            let name = QualifiedName::parse(supertype);
            if !visited.insert(name.clone()) {
                continue;
            }
            if let Some(parent) = source.descriptor(&name) {
                queue.push_back((parent, depth + 1));
            }
        }
    }

    members
}
