//! One property generator per binding shape.

mod callable;
mod field;
mod fluent;
mod getter;
mod no_arg;

pub use callable::CallableGenerator;
pub use field::FieldGenerator;
pub use fluent::FluentGenerator;
pub use getter::GetterGenerator;
pub use no_arg::NoArgGenerator;

use crate::{
    classify::{Candidate, MatchContext, Rejection, Shape},
    naming::accessor_name,
};
use proc_macro2::{Ident, TokenStream};
use propbind_schema::{name::QualifiedName, node::Member, types::TypeRef};
use quote::quote;
use syn::{Path, Type};

///
/// GENERATORS
/// asked in this order; the first viable one claims the member
///

pub static GENERATORS: [&dyn PropertyGenerator; 5] = [
    &FieldGenerator,
    &GetterGenerator,
    &FluentGenerator,
    &CallableGenerator,
    &NoArgGenerator,
];

// generator_for
#[must_use]
pub fn generator_for(shape: Shape) -> &'static dyn PropertyGenerator {
    match shape {
        Shape::Field => &FieldGenerator,
        Shape::Getter => &GetterGenerator,
        Shape::Fluent => &FluentGenerator,
        Shape::Callable => &CallableGenerator,
        Shape::NoArg => &NoArgGenerator,
    }
}

///
/// PropertyGenerator
///

pub trait PropertyGenerator: Sync {
    fn shape(&self) -> Shape;

    /// Shape check: a candidate when `member` follows this convention.
    fn viable(&self, cx: &MatchContext<'_>, member: &Member) -> Option<Candidate>;

    /// Turn an accepted candidate into a node, or reject it when its types
    /// cannot be expressed.
    fn node(&self, cx: &MatchContext<'_>, candidate: Candidate) -> Result<BindingNode, Rejection> {
        BindingNode::resolve(cx, candidate)
    }

    /// The accessor method on the binding struct.
    fn emit(&self, node: &BindingNode, cx: &EmitContext) -> TokenStream;
}

///
/// EmitContext
///
/// Tokens shared by every accessor of one binding struct.
///

#[derive(Clone, Debug)]
pub struct EmitContext {
    /// Path to the binding runtime crate.
    pub core: TokenStream,

    /// The owner type with its type parameters applied.
    pub owner: TokenStream,

    /// Root type parameter of the binding struct.
    pub root: Ident,
}

///
/// BindingNode
///

#[derive(Clone, Debug)]
pub struct BindingNode {
    pub property: String,
    pub shape: Shape,
    pub accessor: Ident,
    pub leaf: Option<Leaf>,
    pub read: Member,
    pub read_ident: Ident,
    pub write: Option<Member>,
    pub write_ident: Option<Ident>,
    pub nested: Option<Nested>,
}

impl BindingNode {
    /// Node with a value leaf and, when the leaf type is bindable, a nested
    /// binding.
    pub fn resolve(cx: &MatchContext<'_>, candidate: Candidate) -> Result<Self, Rejection> {
        let leaf = Leaf::resolve(&candidate.member.ty)?;
        let nested = Nested::resolve(cx, &leaf)?;

        let mut node = Self::without_leaf(candidate)?;
        node.leaf = Some(leaf);
        node.nested = nested;

        Ok(node)
    }

    /// Node that has identity and members but no value.
    pub fn without_leaf(candidate: Candidate) -> Result<Self, Rejection> {
        let accessor = accessor_name(&candidate.property);
        let accessor = syn::parse_str::<Ident>(&accessor)
            .map_err(|_| Rejection::unresolvable(&accessor, "not an identifier"))?;
        let read_ident = member_ident(&candidate.member.name)?;
        let write_ident = candidate
            .setter
            .as_ref()
            .map(|setter| member_ident(&setter.name))
            .transpose()?;

        Ok(Self {
            property: candidate.property,
            shape: candidate.shape,
            accessor,
            leaf: None,
            read: candidate.member,
            read_ident,
            write: candidate.setter,
            write_ident,
            nested: None,
        })
    }

    #[must_use]
    pub const fn is_writable(&self) -> bool {
        matches!(self.shape, Shape::Field) || self.write.is_some()
    }

    /// Whether the setter takes an `Option` and needs the value wrapped.
    #[must_use]
    pub fn setter_takes_option(&self) -> bool {
        self.write
            .as_ref()
            .and_then(|setter| setter.params.first())
            .is_some_and(|param| param.optional_inner().is_some())
    }
}

///
/// Leaf
///
/// The value a node binds. `Option<X>` members bind `X` and report an empty
/// option as an absent value.
///

#[derive(Clone, Debug)]
pub struct Leaf {
    pub ty: TypeRef,
    pub syn: Type,
    pub optional: bool,
}

impl Leaf {
    pub fn resolve(ty: &TypeRef) -> Result<Self, Rejection> {
        let (inner, optional) = ty.optional_inner().map_or((ty, false), |inner| (inner, true));

        match inner {
            TypeRef::Unresolved(text) => Err(Rejection::unresolvable(text, "not a type")),
            TypeRef::Void => Err(Rejection::unresolvable(inner, "no value to bind")),
            TypeRef::Opaque(text) if text.starts_with('&') => Err(Rejection::unresolvable(
                text,
                "borrowed values cannot be bound",
            )),
            _ => {
                let syn = inner
                    .to_syn()
                    .map_err(|err| Rejection::unresolvable(inner, err))?;

                Ok(Self {
                    ty: inner.clone(),
                    syn,
                    optional,
                })
            }
        }
    }

    /// Text reported by the binding's `type_name()`.
    #[must_use]
    pub fn type_name(&self) -> String {
        self.ty.to_string()
    }
}

///
/// Nested
///
/// The binding struct of a bindable leaf type, with the leaf's type
/// arguments.
///

#[derive(Clone, Debug)]
pub struct Nested {
    pub binding: Path,
    pub args: Vec<Type>,
}

impl Nested {
    pub fn resolve(cx: &MatchContext<'_>, leaf: &Leaf) -> Result<Option<Self>, Rejection> {
        let TypeRef::Named { path, args } = &leaf.ty else {
            return Ok(None);
        };
        if leaf.ty.is_binding() || !cx.is_bindable(path) {
            return Ok(None);
        }

        let binding = QualifiedName::parse(path).binding();
        let binding = syn::parse_str::<Path>(&binding.rust_path())
            .map_err(|err| Rejection::unresolvable(&binding, err))?;
        let args = args
            .iter()
            .map(|arg| arg.to_syn().map_err(|err| Rejection::unresolvable(arg, err)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Self { binding, args }))
    }
}

// member_ident
// keywords such as `type` become raw identifiers
pub(crate) fn member_ident(name: &str) -> Result<Ident, Rejection> {
    syn::parse_str::<Ident>(name)
        .or_else(|_| syn::parse_str::<Ident>(&format!("r#{name}")))
        .map_err(|_| Rejection::unresolvable(name, "not an identifier"))
}

// emit_property
// wraps one path step in an accessor returning a plain or nested binding
pub(crate) fn emit_property(
    node: &BindingNode,
    leaf: &Leaf,
    cx: &EmitContext,
    accessor: &TokenStream,
) -> TokenStream {
    let EmitContext { core, root, .. } = cx;
    let ident = &node.accessor;
    let name = &node.property;
    let type_name = leaf.type_name();
    let leaf_ty = &leaf.syn;
    let step = quote!(self.0.then(#name, #type_name, #accessor));

    match &node.nested {
        Some(Nested { binding, args }) => quote! {
            #[must_use]
            pub fn #ident(&self) -> #binding<#(#args,)* #root> {
                #binding::<#(#args,)* #root>::from_path(#step)
            }
        },
        None => quote! {
            #[must_use]
            pub fn #ident(&self) -> #core::PathBinding<#root, #leaf_ty> {
                #step
            }
        },
    }
}

// emit_method_property
// getter, fluent and no-arg shapes all read through a method call
pub(crate) fn emit_method_property(node: &BindingNode, cx: &EmitContext) -> TokenStream {
    let Some(leaf) = &node.leaf else {
        return TokenStream::new();
    };
    let EmitContext { core, owner, .. } = cx;
    let leaf_ty = &leaf.syn;
    let read = &node.read_ident;

    let get = if leaf.optional {
        quote!(|p| p.#read())
    } else {
        quote!(|p| Some(p.#read()))
    };

    let accessor = match &node.write_ident {
        Some(write) => {
            let value = if node.setter_takes_option() {
                quote!(Some(v))
            } else {
                quote!(v)
            };

            quote!(#core::Accessor::<#owner, #leaf_ty>::method(#get, |p, v| {
                p.#write(#value);
            }))
        }
        None => quote!(#core::Accessor::<#owner, #leaf_ty>::getter(#get)),
    };

    emit_property(node, leaf, cx, &accessor)
}

///
/// TESTS
///
