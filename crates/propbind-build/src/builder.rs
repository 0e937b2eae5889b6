use crate::{
    classify::{Classification, Classifier, MatchContext, Rejection},
    config::Config,
    error::BuildError,
    generator::{BindingNode, generator_for},
};
use proc_macro2::Ident;
use propbind_schema::{
    name::QualifiedName,
    node::{TypeDescriptor, TypeParam as ParamDescriptor},
    source::MemberSource,
};
use quote::format_ident;
use std::collections::BTreeSet;
use syn::{Path, TypeParam, Visibility, parse_quote};
use tracing::{debug, info};

const ROOT_NAMES: [&str; 3] = ["R", "Root", "BindingRoot"];

///
/// RejectedMember
///

#[derive(Clone, Debug)]
pub struct RejectedMember {
    pub member: String,
    pub reason: Rejection,
}

///
/// BindingClass
///
/// The binding tree of one type: its accepted nodes sorted by property name
/// and every member that did not make it, with the reason.
///

#[derive(Clone, Debug)]
pub struct BindingClass {
    pub owner: QualifiedName,
    pub owner_path: Path,
    pub binding: QualifiedName,
    pub ident: Ident,
    pub vis: Visibility,
    pub type_params: Vec<TypeParam>,
    pub root: Ident,
    pub nodes: Vec<BindingNode>,
    pub rejected: Vec<RejectedMember>,
}

impl BindingClass {
    #[must_use]
    pub fn node(&self, property: &str) -> Option<&BindingNode> {
        self.nodes.iter().find(|node| node.property == property)
    }

    /// Why `member` was rejected, if it was.
    #[must_use]
    pub fn rejection(&self, member: &str) -> Option<&Rejection> {
        self.rejected
            .iter()
            .find(|rejected| rejected.member == member)
            .map(|rejected| &rejected.reason)
    }

    #[must_use]
    pub fn properties(&self) -> Vec<&str> {
        self.nodes.iter().map(|node| node.property.as_str()).collect()
    }
}

///
/// BindingTreeBuilder
///

pub struct BindingTreeBuilder<'a> {
    source: &'a dyn MemberSource,
    config: &'a Config,
}

impl<'a> BindingTreeBuilder<'a> {
    #[must_use]
    pub const fn new(source: &'a dyn MemberSource, config: &'a Config) -> Self {
        Self { source, config }
    }

    /// Classify the member closure of `ty` and resolve the winning candidates
    /// into nodes.
    ///
    /// Candidates are ranked by supertype depth, then shape, then closure
    /// order. The first candidate of a property name that resolves wins and
    /// the rest are shadowed.
    pub fn build(&self, ty: &TypeDescriptor) -> Result<BindingClass, BuildError> {
        let owner = ty.name();
        let invalid_path = || BuildError::InvalidPath {
            path: ty.path.clone(),
        };
        let owner_path = syn::parse_str::<Path>(&owner.rust_path()).map_err(|_| invalid_path())?;
        let binding = owner.binding();
        let ident = syn::parse_str::<Ident>(binding.simple_name()).map_err(|_| invalid_path())?;
        let type_params = ty
            .type_params
            .iter()
            .map(|param| parse_type_param(ty, param))
            .collect::<Result<Vec<_>, _>>()?;
        let root = root_ident(&type_params);

        let members = self.source.list_members(ty);
        let cx = MatchContext::new(ty, &members, self.source, &self.config.options);
        let classifier = Classifier::new(&self.config.skip);

        let mut rejected = Vec::new();
        let mut candidates = Vec::new();
        for (order, member) in members.iter().enumerate() {
            match classifier.classify(&cx, member) {
                Classification::Accepted(candidate) => candidates.push((order, candidate)),
                Classification::Rejected(reason) => reject(&mut rejected, ty, &member.name, reason),
            }
        }
        candidates.sort_by_key(|(order, candidate)| (candidate.member.depth, candidate.shape, *order));

        let mut properties = BTreeSet::new();
        let mut accessors = BTreeSet::new();
        let mut nodes = Vec::new();
        for (_, candidate) in candidates {
            let member = candidate.member.name.clone();
            let property = candidate.property.clone();

            if properties.contains(&property) {
                reject(&mut rejected, ty, &member, Rejection::Shadowed { property });
                continue;
            }

            match generator_for(candidate.shape).node(&cx, candidate) {
                Ok(node) => {
                    let accessor = node.accessor.to_string();
                    if !accessors.insert(accessor.clone()) {
                        reject(
                            &mut rejected,
                            ty,
                            &member,
                            Rejection::AccessorCollision { accessor },
                        );
                        continue;
                    }

                    properties.insert(property);
                    nodes.push(node);
                }
                Err(reason) => reject(&mut rejected, ty, &member, reason),
            }
        }

        nodes.sort_by(|a, b| a.property.cmp(&b.property));
        ensure_unique_properties(&ty.path, &nodes)?;

        info!(
            ty = %ty.path,
            nodes = nodes.len(),
            rejected = rejected.len(),
            "binding tree built"
        );

        Ok(BindingClass {
            owner,
            owner_path,
            binding,
            ident,
            vis: parse_quote!(pub),
            type_params,
            root,
            nodes,
            rejected,
        })
    }
}

fn reject(rejected: &mut Vec<RejectedMember>, ty: &TypeDescriptor, member: &str, reason: Rejection) {
    debug!(ty = %ty.path, member, reason = %reason, "member rejected");

    rejected.push(RejectedMember {
        member: member.to_string(),
        reason,
    });
}

/// Nodes must be sorted by property; two nodes with one property name mean
/// the precedence pass is broken.
pub fn ensure_unique_properties(ty: &str, nodes: &[BindingNode]) -> Result<(), BuildError> {
    match nodes
        .windows(2)
        .find(|pair| pair[0].property == pair[1].property)
    {
        Some(pair) => Err(BuildError::DuplicateProperty {
            ty: ty.to_string(),
            property: pair[0].property.clone(),
        }),
        None => Ok(()),
    }
}

fn parse_type_param(ty: &TypeDescriptor, param: &ParamDescriptor) -> Result<TypeParam, BuildError> {
    let text = if param.bounds.is_empty() {
        param.name.clone()
    } else {
        format!("{}: {}", param.name, param.bounds.join(" + "))
    };

    syn::parse_str::<TypeParam>(&text).map_err(|err| BuildError::InvalidTypeParam {
        ty: ty.path.clone(),
        param: param.name.clone(),
        reason: err.to_string(),
    })
}

// root_ident
// first root name the owner's own parameters leave free
fn root_ident(params: &[TypeParam]) -> Ident {
    let taken = |name: &str| params.iter().any(|param| param.ident == name);
    let name = ROOT_NAMES
        .into_iter()
        .find(|name| !taken(*name))
        .unwrap_or("PropbindRoot");

    format_ident!("{name}")
}

///
/// TESTS
///
