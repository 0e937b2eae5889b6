use crate::{
    config::{FluentSetterMatch, Options},
    generator::{GENERATORS, PropertyGenerator},
};
use derive_more::Display;
use propbind_schema::{
    name::QualifiedName,
    node::{Member, TypeDescriptor},
    skip::SkipPolicy,
    source::MemberSource,
    types::TypeRef,
};

///
/// Shape
///
/// Accessor convention a member follows. The declaration order is the
/// tie-break rank between candidates at the same supertype depth.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Shape {
    Field,
    Getter,
    Fluent,
    Callable,
    NoArg,
}

///
/// Candidate
///
/// A member accepted under one shape, with the property it would bind and
/// the setter found for it.
///

#[derive(Clone, Debug)]
pub struct Candidate {
    pub member: Member,
    pub shape: Shape,
    pub property: String,
    pub setter: Option<Member>,
}

impl Candidate {
    #[must_use]
    pub fn new(member: &Member, shape: Shape, property: impl Into<String>) -> Self {
        Self {
            member: member.clone(),
            shape,
            property: property.into(),
            setter: None,
        }
    }

    #[must_use]
    pub fn with_setter(mut self, setter: Option<&Member>) -> Self {
        self.setter = setter.cloned();
        self
    }
}

///
/// Rejection
///
/// Why a member produced no binding. Recorded for diagnostics only.
///

#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum Rejection {
    #[display("accessor '{accessor}' is already taken")]
    AccessorCollision { accessor: String },

    #[display("deprecated")]
    Deprecated,

    #[display("not public")]
    NotPublic,

    #[display("shadowed by another '{property}' binding")]
    Shadowed { property: String },

    #[display("matches no binding shape")]
    Shapeless,

    #[display("suppressed by skip rule for '{property}'")]
    Skipped { property: String },

    #[display("static")]
    Static,

    #[display("cannot resolve '{ty}': {reason}")]
    Unresolvable { ty: String, reason: String },
}

impl Rejection {
    pub(crate) fn unresolvable(ty: impl ToString, reason: impl ToString) -> Self {
        Self::Unresolvable {
            ty: ty.to_string(),
            reason: reason.to_string(),
        }
    }
}

///
/// Classification
///

#[derive(Clone, Debug)]
pub enum Classification {
    Accepted(Candidate),
    Rejected(Rejection),
}

///
/// MatchContext
///
/// Everything a shape matcher may look at besides the member itself: the
/// owner, its full member closure and the source for nested lookups.
///

#[derive(Clone, Copy)]
pub struct MatchContext<'a> {
    pub owner: &'a TypeDescriptor,
    pub members: &'a [Member],
    pub source: &'a dyn MemberSource,
    pub options: &'a Options,
}

impl<'a> MatchContext<'a> {
    #[must_use]
    pub const fn new(
        owner: &'a TypeDescriptor,
        members: &'a [Member],
        source: &'a dyn MemberSource,
        options: &'a Options,
    ) -> Self {
        Self {
            owner,
            members,
            source,
            options,
        }
    }

    /// Public, non-static, single-parameter method called `name`, whose
    /// parameter is exactly `param` when one is given.
    #[must_use]
    pub fn find_unary(&self, name: &str, param: Option<&TypeRef>) -> Option<&'a Member> {
        self.members.iter().find(|member| {
            member.name == name
                && member.is_unary_instance_method()
                && param.is_none_or(|param| member.params.first() == Some(param))
        })
    }

    /// Setter for a getter of type `ty`.
    #[must_use]
    pub fn find_setter(&self, name: &str, ty: &TypeRef) -> Option<&'a Member> {
        self.find_unary(name, Some(ty))
    }

    /// Setter half of a fluent pair, matched per the configured policy.
    #[must_use]
    pub fn find_fluent_setter(&self, getter: &Member) -> Option<&'a Member> {
        match self.options.fluent_setter {
            FluentSetterMatch::Exact => self.find_unary(&getter.name, Some(&getter.ty)),
            FluentSetterMatch::Named => self.find_unary(&getter.name, None),
        }
    }

    /// Whether any method called `name` takes exactly one parameter.
    #[must_use]
    pub fn has_one_param_method(&self, name: &str) -> bool {
        self.members
            .iter()
            .any(|member| member.is_method() && member.name == name && member.params.len() == 1)
    }

    #[must_use]
    pub fn is_bindable(&self, path: &str) -> bool {
        self.source.is_bindable(&QualifiedName::parse(path))
    }
}

///
/// Classifier
///
/// Decides whether and how a member becomes a binding. Generators are asked
/// in order and the first viable one wins; skip rules are checked last and
/// can reject any shape.
///

pub struct Classifier<'a> {
    skip: &'a SkipPolicy,
    generators: &'a [&'static dyn PropertyGenerator],
}

impl<'a> Classifier<'a> {
    #[must_use]
    pub fn new(skip: &'a SkipPolicy) -> Self {
        Self {
            skip,
            generators: &GENERATORS,
        }
    }

    #[must_use]
    pub fn classify(&self, cx: &MatchContext<'_>, member: &Member) -> Classification {
        if !member.is_public() {
            return Classification::Rejected(Rejection::NotPublic);
        }
        if member.is_static() {
            return Classification::Rejected(Rejection::Static);
        }
        if member.deprecated {
            return Classification::Rejected(Rejection::Deprecated);
        }

        let Some(candidate) = self
            .generators
            .iter()
            .find_map(|generator| generator.viable(cx, member))
        else {
            return Classification::Rejected(Rejection::Shapeless);
        };

        if self.skip.skips(&cx.owner.path, &candidate.property) {
            return Classification::Rejected(Rejection::Skipped {
                property: candidate.property,
            });
        }

        Classification::Accepted(candidate)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use propbind_schema::{inventory::Inventory, types::Modifier};

    fn classify_in(
        owner: &TypeDescriptor,
        options: &Options,
        skip: &SkipPolicy,
        member: &Member,
    ) -> Classification {
        let inventory = Inventory::default();
        let cx = MatchContext::new(owner, &owner.members, &inventory, options);

        Classifier::new(skip).classify(&cx, member)
    }

    fn classify(owner: &TypeDescriptor, name: &str) -> Classification {
        let member = owner
            .members
            .iter()
            .find(|m| m.name == name)
            .unwrap()
            .clone();

        classify_in(owner, &Options::default(), &SkipPolicy::new(), &member)
    }

    fn accepted(classification: Classification) -> Candidate {
        match classification {
            Classification::Accepted(candidate) => candidate,
            Classification::Rejected(rejection) => panic!("rejected: {rejection}"),
        }
    }

    fn rejected(classification: Classification) -> Rejection {
        match classification {
            Classification::Accepted(candidate) => {
                panic!("accepted as {} '{}'", candidate.shape, candidate.property)
            }
            Classification::Rejected(rejection) => rejection,
        }
    }

    #[test]
    fn visibility_and_static_reject_first() {
        let owner = TypeDescriptor::new("Example")
            .with_member(Member::field("hidden", "i32"))
            .with_member(
                Member::field("COUNT", "i32")
                    .public()
                    .with_modifier(Modifier::Static),
            )
            .with_member(Member::field("old", "i32").public().deprecated());

        assert_eq!(rejected(classify(&owner, "hidden")), Rejection::NotPublic);
        assert_eq!(rejected(classify(&owner, "COUNT")), Rejection::Static);
        assert_eq!(rejected(classify(&owner, "old")), Rejection::Deprecated);
    }

    #[test]
    fn fields_bind_under_their_own_name() {
        let owner = TypeDescriptor::new("Point").with_member(Member::field("x", "i32").public());
        let candidate = accepted(classify(&owner, "x"));

        assert_eq!(candidate.shape, Shape::Field);
        assert_eq!(candidate.property, "x");
    }

    #[test]
    fn binding_typed_members_are_not_wrapped() {
        let owner = TypeDescriptor::new("Holder")
            .with_member(Member::field("point", "crate::geo::PointBinding").public())
            .with_member(Member::method("getPoint", "PointBinding").public());

        assert_eq!(rejected(classify(&owner, "point")), Rejection::Shapeless);
        assert_eq!(rejected(classify(&owner, "getPoint")), Rejection::Shapeless);
    }

    #[test]
    fn optional_binding_members_are_not_wrapped() {
        let owner = TypeDescriptor::new("Holder")
            .with_member(Member::field("view", "Option<crate::geo::PointBinding>").public())
            .with_member(Member::method("getOther", "Option<PointBinding>").public())
            .with_member(Member::method("latest", "Option<PointBinding>").public());

        for name in ["view", "getOther", "latest"] {
            assert_eq!(rejected(classify(&owner, name)), Rejection::Shapeless, "{name}");
        }
    }

    #[test]
    fn getter_with_exactly_typed_setter_is_writable() {
        let owner = TypeDescriptor::new("Person")
            .with_member(Member::method("getName", "String").public())
            .with_member(Member::method("setName", "void").public().with_param("String"))
            .with_member(Member::method("getAge", "u32").public())
            .with_member(Member::method("setAge", "void").public().with_param("u64"));

        let name = accepted(classify(&owner, "getName"));
        assert_eq!(name.shape, Shape::Getter);
        assert_eq!(name.property, "name");
        assert_eq!(name.setter.map(|s| s.name).as_deref(), Some("setName"));

        let age = accepted(classify(&owner, "getAge"));
        assert!(age.setter.is_none());
    }

    #[test]
    fn snake_case_getters_pair_with_snake_case_setters() {
        let owner = TypeDescriptor::new("Account")
            .with_member(Member::method("get_balance", "i64").public())
            .with_member(Member::method("set_balance", "()").public().with_param("i64"))
            .with_member(Member::method("is_closed", "bool").public());

        let balance = accepted(classify(&owner, "get_balance"));
        assert_eq!(balance.property, "balance");
        assert!(balance.setter.is_some());

        let closed = accepted(classify(&owner, "is_closed"));
        assert_eq!(closed.shape, Shape::Getter);
        assert_eq!(closed.property, "closed");
    }

    #[test]
    fn getter_constraints() {
        let owner = TypeDescriptor::new("Example")
            .with_member(Member::method("getClass", "Class").public())
            .with_member(Member::method("getData", "Data").public().with_throws("IOException"))
            .with_member(Member::method("getAt", "i32").public().with_param("usize"))
            .with_member(Member::method("get", "i32").public());

        assert_eq!(rejected(classify(&owner, "getClass")), Rejection::Shapeless);
        assert_eq!(rejected(classify(&owner, "getData")), Rejection::Shapeless);
        assert_eq!(rejected(classify(&owner, "getAt")), Rejection::Shapeless);
        assert_eq!(accepted(classify(&owner, "get")).shape, Shape::NoArg);
    }

    #[test]
    fn fluent_pair_is_one_property() {
        let owner = TypeDescriptor::new("Pair")
            .with_member(Member::method("foo", "Integer").public())
            .with_member(Member::method("foo", "void").public().with_param("Integer"));

        let candidate = accepted(classify(&owner, "foo"));
        assert_eq!(candidate.shape, Shape::Fluent);
        assert_eq!(candidate.property, "foo");
        assert!(candidate.setter.is_some());

        // the setter half takes a parameter and matches no shape on its own
        let setter = owner.members[1].clone();
        assert_eq!(
            rejected(classify_in(
                &owner,
                &Options::default(),
                &SkipPolicy::new(),
                &setter
            )),
            Rejection::Shapeless
        );
    }

    #[test]
    fn names_that_only_look_prefixed_stay_plain() {
        let owner = TypeDescriptor::new("Book")
            .with_member(Member::method("issuer", "String").public())
            .with_member(Member::method("issuer", "void").public().with_param("String"))
            .with_member(Member::method("settings", "String").public())
            .with_member(Member::method("settings", "void").public().with_param("String"))
            .with_member(Member::method("isbn", "String").public());

        for name in ["issuer", "settings"] {
            let candidate = accepted(classify(&owner, name));
            assert_eq!(candidate.shape, Shape::Fluent, "{name}");
            assert_eq!(candidate.property, name);
            assert!(candidate.setter.is_some());
        }

        let isbn = accepted(classify(&owner, "isbn"));
        assert_eq!(isbn.shape, Shape::NoArg);
        assert_eq!(isbn.property, "isbn");
    }

    #[test]
    fn fluent_setter_match_is_configurable() {
        let owner = TypeDescriptor::new("Pair")
            .with_member(Member::method("foo", "Integer").public())
            .with_member(Member::method("foo", "Pair").public().with_param("i32"));
        let getter = owner.members[0].clone();

        let exact = classify_in(&owner, &Options::default(), &SkipPolicy::new(), &getter);
        assert_eq!(rejected(exact), Rejection::Shapeless);

        let named = Options {
            fluent_setter: FluentSetterMatch::Named,
        };
        let loose = classify_in(&owner, &named, &SkipPolicy::new(), &getter);
        assert_eq!(accepted(loose).shape, Shape::Fluent);
    }

    #[test]
    fn monitor_methods_are_never_callables() {
        let owner = TypeDescriptor::new("Worker")
            .with_member(Member::method("wait", "void").public())
            .with_member(Member::method("notify", "void").public())
            .with_member(Member::method("notifyAll", "void").public())
            .with_member(Member::method("reset", "void").public());

        for name in ["wait", "notify", "notifyAll"] {
            assert_eq!(rejected(classify(&owner, name)), Rejection::Shapeless);
        }

        let reset = accepted(classify(&owner, "reset"));
        assert_eq!(reset.shape, Shape::Callable);
        assert_eq!(reset.property, "reset");
    }

    #[test]
    fn no_arg_methods_are_read_only_properties() {
        let owner = TypeDescriptor::new("Queue")
            .with_member(Member::method("size", "usize").public())
            .with_member(Member::method("hashCode", "i32").public())
            .with_member(Member::method("toString", "String").public())
            .with_member(Member::method("limit", "usize").public())
            .with_member(Member::method("limit", "void").public().with_param("u8"));

        let size = accepted(classify(&owner, "size"));
        assert_eq!(size.shape, Shape::NoArg);
        assert!(size.setter.is_none());

        assert_eq!(rejected(classify(&owner, "hashCode")), Rejection::Shapeless);
        assert_eq!(rejected(classify(&owner, "toString")), Rejection::Shapeless);
        // a same-named one-parameter method rules out the read-only shape
        assert_eq!(rejected(classify(&owner, "limit")), Rejection::Shapeless);
    }

    #[test]
    fn skip_rules_reject_any_shape() {
        let owner = TypeDescriptor::new("Example")
            .with_member(Member::field("name", "String").public())
            .with_member(Member::method("getTitle", "String").public())
            .with_member(Member::method("close", "void").public());
        let skip = SkipPolicy::new()
            .with_rule("Example", "name")
            .with_rule("Example", "title")
            .with_rule("Example", "close");

        for member in &owner.members {
            let rejection = rejected(classify_in(&owner, &Options::default(), &skip, member));
            assert!(matches!(rejection, Rejection::Skipped { .. }), "{rejection}");
        }

        let other = TypeDescriptor::new("Other").with_member(Member::field("name", "String").public());
        let member = other.members[0].clone();
        accepted(classify_in(&other, &Options::default(), &skip, &member));
    }
}
