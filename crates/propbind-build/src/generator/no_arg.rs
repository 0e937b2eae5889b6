use crate::{
    classify::{Candidate, MatchContext, Shape},
    generator::{BindingNode, EmitContext, PropertyGenerator, emit_method_property},
    naming::has_accessor_prefix,
};
use proc_macro2::TokenStream;
use propbind_schema::node::Member;

// methods every object has; never properties
const UNIVERSAL_METHODS: [&str; 4] = ["getClass", "hashCode", "toString", "clone"];

///
/// NoArgGenerator
///
/// Unprefixed no-arg methods returning a value, such as `size()`. Always
/// read-only, and only when no same-named one-parameter method exists.
///

pub struct NoArgGenerator;

impl PropertyGenerator for NoArgGenerator {
    fn shape(&self) -> Shape {
        Shape::NoArg
    }

    fn viable(&self, cx: &MatchContext<'_>, member: &Member) -> Option<Candidate> {
        if !member.is_method()
            || !member.params.is_empty()
            || !member.throws.is_empty()
            || member.ty.is_void()
            || member.ty.is_binding_leaf()
            || has_accessor_prefix(&member.name)
            || UNIVERSAL_METHODS.contains(&member.name.as_str())
            || cx.has_one_param_method(&member.name)
        {
            return None;
        }

        Some(Candidate::new(member, Shape::NoArg, &member.name))
    }

    fn emit(&self, node: &BindingNode, cx: &EmitContext) -> TokenStream {
        emit_method_property(node, cx)
    }
}
