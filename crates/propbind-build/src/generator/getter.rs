use crate::{
    classify::{Candidate, MatchContext, Shape},
    generator::{BindingNode, EmitContext, PropertyGenerator, emit_method_property},
    naming::{derive_getter_property_name, derive_is_property_name, setter_name_for},
};
use proc_macro2::TokenStream;
use propbind_schema::node::Member;

const REFLECTIVE_GETTER: &str = "getClass";

///
/// GetterGenerator
///
/// `getName()` / `get_name()` plus `isOpen()` for booleans. The matching
/// setter is looked up across the whole member closure and must take
/// exactly the getter's return type; without one the property is read-only.
///

pub struct GetterGenerator;

impl PropertyGenerator for GetterGenerator {
    fn shape(&self) -> Shape {
        Shape::Getter
    }

    fn viable(&self, cx: &MatchContext<'_>, member: &Member) -> Option<Candidate> {
        if !member.is_method()
            || !member.params.is_empty()
            || !member.throws.is_empty()
            || member.ty.is_void()
            || member.ty.is_binding_leaf()
            || member.name == REFLECTIVE_GETTER
        {
            return None;
        }

        let property = derive_getter_property_name(&member.name).or_else(|| {
            member
                .ty
                .is_boolean()
                .then(|| derive_is_property_name(&member.name))
                .flatten()
        })?;
        let setter = cx.find_setter(&setter_name_for(&member.name, &property), &member.ty);

        Some(Candidate::new(member, Shape::Getter, property).with_setter(setter))
    }

    fn emit(&self, node: &BindingNode, cx: &EmitContext) -> TokenStream {
        emit_method_property(node, cx)
    }
}
