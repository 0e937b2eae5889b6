use crate::{
    classify::{Candidate, MatchContext, Shape},
    generator::{BindingNode, EmitContext, PropertyGenerator, emit_property},
};
use proc_macro2::TokenStream;
use propbind_schema::node::Member;
use quote::quote;

///
/// FieldGenerator
///
/// Public fields, bound in place. Always writable.
///

pub struct FieldGenerator;

impl PropertyGenerator for FieldGenerator {
    fn shape(&self) -> Shape {
        Shape::Field
    }

    fn viable(&self, _: &MatchContext<'_>, member: &Member) -> Option<Candidate> {
        if !member.is_field() || member.ty.is_binding_leaf() {
            return None;
        }

        Some(Candidate::new(member, Shape::Field, &member.name))
    }

    fn emit(&self, node: &BindingNode, cx: &EmitContext) -> TokenStream {
        let Some(leaf) = &node.leaf else {
            return TokenStream::new();
        };
        let EmitContext { core, owner, .. } = cx;
        let leaf_ty = &leaf.syn;
        let field = &node.read_ident;

        let accessor = if leaf.optional {
            quote! {
                #core::Accessor::<#owner, #leaf_ty>::field(
                    |p| p.#field.as_ref(),
                    |p| p.#field.as_mut(),
                    |p, v| p.#field = Some(v),
                )
            }
        } else {
            quote! {
                #core::Accessor::<#owner, #leaf_ty>::field(
                    |p| Some(&p.#field),
                    |p| Some(&mut p.#field),
                    |p, v| p.#field = v,
                )
            }
        };

        emit_property(node, leaf, cx, &accessor)
    }
}
