use crate::source::DeriveSource;
use darling::{Error as DarlingError, FromDeriveInput, FromField, ast::Data, util::Ignored};
use proc_macro2::TokenStream;
use propbind_build::{builder::BindingTreeBuilder, config::Config, render::render};
use propbind_paths::CratePaths;
use propbind_schema::{
    name::QualifiedName,
    node::{Member, TypeDescriptor, TypeParam},
    skip::SkipPolicy,
    types::{MemberKind, TypeRef},
};
use quote::ToTokens;
use std::{collections::BTreeSet, sync::OnceLock};
use syn::{
    Attribute, DeriveInput, GenericParam, Generics, Ident, Type, Visibility, WherePredicate,
    ext::IdentExt,
};

// read once per compiler process
static CONFIG: OnceLock<Result<Config, String>> = OnceLock::new();

fn config() -> Result<&'static Config, DarlingError> {
    CONFIG
        .get_or_init(|| Config::from_manifest_dir().map_err(|err| err.to_string()))
        .as_ref()
        .map_err(DarlingError::custom)
}

// derive_bindable
pub fn derive_bindable(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    BindableInput::from_derive_input(&input)
        .and_then(|input| input.expand())
        .unwrap_or_else(DarlingError::write_errors)
}

///
/// BindableInput
///

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(binding), supports(struct_named, struct_unit))]
struct BindableInput {
    ident: Ident,
    vis: Visibility,
    generics: Generics,
    data: Data<Ignored, BindableField>,
}

impl BindableInput {
    fn expand(&self) -> Result<TokenStream, DarlingError> {
        let owner = self.ident.to_string();
        let mut ty = TypeDescriptor::new(&owner);
        ty.type_params = type_params(&self.generics)?;

        let mut skip = SkipPolicy::new();
        let mut nested = BTreeSet::new();
        let mut errors = DarlingError::accumulator();

        if let Data::Struct(fields) = &self.data {
            for field in fields.iter() {
                let Some(ident) = &field.ident else {
                    continue;
                };
                let name = ident.unraw().to_string();

                if field.skip {
                    skip = skip.with_rule(&owner, &name);
                }
                if field.nested
                    && let Some(leaf) = errors.handle(field.nested_leaf())
                {
                    nested.insert(leaf);
                }

                ty = ty.with_member(field.member(&name));
            }
        }
        errors.finish()?;

        let config = config()?.clone().with_skip(&skip);
        let source = DeriveSource::new(ty, nested);
        let mut class = BindingTreeBuilder::new(&source, &config)
            .build(source.ty())
            .map_err(|err| DarlingError::custom(err).with_span(&self.ident))?;
        class.vis = self.vis.clone();

        Ok(render(&class, &CratePaths::new().core))
    }
}

///
/// BindableField
///

#[derive(Debug, FromField)]
#[darling(attributes(binding), forward_attrs(deprecated))]
struct BindableField {
    ident: Option<Ident>,
    vis: Visibility,
    ty: Type,
    attrs: Vec<Attribute>,

    #[darling(default)]
    skip: bool,

    #[darling(default)]
    nested: bool,
}

impl BindableField {
    fn member(&self, name: &str) -> Member {
        let mut member = Member::new(MemberKind::Field, name, TypeRef::from(&self.ty));
        if !matches!(self.vis, Visibility::Inherited) {
            member = member.public();
        }
        if self.attrs.iter().any(|attr| attr.path().is_ident("deprecated")) {
            member = member.deprecated();
        }

        member
    }

    // the type whose binding a nested field returns, looking through Option
    fn nested_leaf(&self) -> Result<QualifiedName, DarlingError> {
        let ty = TypeRef::from(&self.ty);
        let leaf = ty.optional_inner().unwrap_or(&ty);

        match leaf {
            TypeRef::Named { path, .. } => Ok(QualifiedName::parse(path)),
            _ => Err(DarlingError::custom("nested fields need a named struct type")
                .with_span(&self.ty)),
        }
    }
}

// type_params
// bounds written inline and in simple where clauses both land on the param
fn type_params(generics: &Generics) -> Result<Vec<TypeParam>, DarlingError> {
    let mut params = Vec::new();

    for param in &generics.params {
        match param {
            GenericParam::Type(param) => {
                let mut descriptor = TypeParam::new(&param.ident.to_string());
                for bound in &param.bounds {
                    descriptor = descriptor.with_bound(&bound.to_token_stream().to_string());
                }
                params.push(descriptor);
            }
            GenericParam::Lifetime(param) => {
                return Err(
                    DarlingError::custom("lifetime parameters cannot be bound").with_span(param)
                );
            }
            GenericParam::Const(param) => {
                return Err(
                    DarlingError::custom("const parameters cannot be bound").with_span(param)
                );
            }
        }
    }

    if let Some(where_clause) = &generics.where_clause {
        for predicate in &where_clause.predicates {
            let WherePredicate::Type(predicate) = predicate else {
                return Err(
                    DarlingError::custom("only type bounds are supported").with_span(predicate)
                );
            };
            let target = predicate.bounded_ty.to_token_stream().to_string();
            let Some(param) = params.iter_mut().find(|param| param.name == target) else {
                return Err(DarlingError::custom("bounds must name a type parameter")
                    .with_span(&predicate.bounded_ty));
            };
            param.bounds.extend(
                predicate
                    .bounds
                    .iter()
                    .map(|bound| bound.to_token_stream().to_string()),
            );
        }
    }

    Ok(params)
}

///
/// TESTS
///
