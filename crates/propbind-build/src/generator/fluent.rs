use crate::{
    classify::{Candidate, MatchContext, Shape},
    generator::{BindingNode, EmitContext, PropertyGenerator, emit_method_property},
    naming::has_accessor_prefix,
};
use proc_macro2::TokenStream;
use propbind_schema::node::Member;

///
/// FluentGenerator
///
/// A `foo()` getter paired with a one-parameter `foo(v)` setter. How
/// strictly the setter's parameter must match is set by
/// `Options::fluent_setter`.
///

pub struct FluentGenerator;

impl PropertyGenerator for FluentGenerator {
    fn shape(&self) -> Shape {
        Shape::Fluent
    }

    fn viable(&self, cx: &MatchContext<'_>, member: &Member) -> Option<Candidate> {
        if !member.is_method()
            || !member.params.is_empty()
            || !member.throws.is_empty()
            || member.ty.is_void()
            || member.ty.is_binding_leaf()
            || has_accessor_prefix(&member.name)
        {
            return None;
        }

        let setter = cx.find_fluent_setter(member)?;

        Some(Candidate::new(member, Shape::Fluent, &member.name).with_setter(Some(setter)))
    }

    fn emit(&self, node: &BindingNode, cx: &EmitContext) -> TokenStream {
        emit_method_property(node, cx)
    }
}
