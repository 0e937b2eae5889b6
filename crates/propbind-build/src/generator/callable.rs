use crate::{
    classify::{Candidate, MatchContext, Rejection, Shape},
    generator::{BindingNode, EmitContext, PropertyGenerator},
};
use proc_macro2::TokenStream;
use propbind_schema::node::Member;
use quote::quote;

// monitor operations, never bound as actions
const MONITOR_METHODS: [&str; 3] = ["wait", "notify", "notifyAll"];

///
/// CallableGenerator
///
/// Void no-arg methods, bound as actions with no value.
///

pub struct CallableGenerator;

impl PropertyGenerator for CallableGenerator {
    fn shape(&self) -> Shape {
        Shape::Callable
    }

    fn viable(&self, _: &MatchContext<'_>, member: &Member) -> Option<Candidate> {
        if !member.is_method()
            || !member.params.is_empty()
            || !member.ty.is_void()
            || !member.throws.is_empty()
            || MONITOR_METHODS.contains(&member.name.as_str())
        {
            return None;
        }

        Some(Candidate::new(member, Shape::Callable, &member.name))
    }

    fn node(&self, _: &MatchContext<'_>, candidate: Candidate) -> Result<BindingNode, Rejection> {
        BindingNode::without_leaf(candidate)
    }

    fn emit(&self, node: &BindingNode, cx: &EmitContext) -> TokenStream {
        let EmitContext { core, root, .. } = cx;
        let ident = &node.accessor;
        let name = &node.property;
        let method = &node.read_ident;

        quote! {
            #[must_use]
            pub fn #ident(&self) -> #core::CallableBinding<#root> {
                self.0.callable(#name, |p| {
                    p.#method();
                })
            }
        }
    }
}
