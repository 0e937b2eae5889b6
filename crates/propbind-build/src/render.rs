use crate::{
    builder::BindingClass,
    generator::{EmitContext, generator_for},
};
use proc_macro2::TokenStream;
use quote::quote;

/// Binding struct, constructors and accessors for one class.
///
/// The struct wraps a `PathBinding<R, Owner>` and derefs to it, so every
/// binding exposes the runtime contract directly. `R` defaults to the owner,
/// which makes `FooBinding::new()` the standalone root of a tree.
#[must_use]
pub fn render(class: &BindingClass, core: &TokenStream) -> TokenStream {
    let BindingClass {
        owner,
        owner_path,
        ident,
        vis,
        type_params,
        root,
        nodes,
        ..
    } = class;

    let names = type_params.iter().map(|param| &param.ident).collect::<Vec<_>>();
    let params = type_params
        .iter()
        .map(|param| {
            let name = &param.ident;
            let bounds = &param.bounds;
            if bounds.is_empty() {
                quote!(#name: 'static)
            } else {
                quote!(#name: #bounds + 'static)
            }
        })
        .collect::<Vec<_>>();
    let owner_ty = if names.is_empty() {
        quote!(#owner_path)
    } else {
        quote!(#owner_path<#(#names),*>)
    };

    let cx = EmitContext {
        core: core.clone(),
        owner: owner_ty.clone(),
        root: root.clone(),
    };
    let accessors = nodes
        .iter()
        .map(|node| generator_for(node.shape).emit(node, &cx));
    let doc = format!(" Property bindings for `{owner}`.");

    quote! {
        #[doc = #doc]
        #vis struct #ident<#(#params,)* #root: 'static = #owner_ty>(
            #core::PathBinding<#root, #owner_ty>,
        );

        impl<#(#params),*> #ident<#(#names,)* #owner_ty> {
            #[must_use]
            pub fn new() -> Self {
                Self(#core::PathBinding::new())
            }

            #[must_use]
            pub fn with_value(value: #owner_ty) -> Self {
                Self(#core::PathBinding::with_value(value))
            }
        }

        impl<#(#params),*> ::core::default::Default for #ident<#(#names,)* #owner_ty> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<#(#params,)* #root: 'static> #ident<#(#names,)* #root> {
            #[must_use]
            pub fn from_path(path: #core::PathBinding<#root, #owner_ty>) -> Self {
                Self(path)
            }

            #[must_use]
            pub fn into_path(self) -> #core::PathBinding<#root, #owner_ty> {
                self.0
            }

            #(#accessors)*
        }

        impl<#(#params,)* #root: 'static> ::core::ops::Deref for #ident<#(#names,)* #root> {
            type Target = #core::PathBinding<#root, #owner_ty>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl<#(#params,)* #root: 'static> ::core::clone::Clone for #ident<#(#names,)* #root> {
            fn clone(&self) -> Self {
                Self(::core::clone::Clone::clone(&self.0))
            }
        }

        impl<#(#params,)* #root: 'static> ::core::fmt::Debug for #ident<#(#names,)* #root> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(&self.0, f)
            }
        }
    }
}

///
/// TESTS
///
