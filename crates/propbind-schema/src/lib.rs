//! Data model for binding generation: type descriptors, members, type
//! references, skip rules and the member sources that feed the generator.

pub mod error;
pub mod inventory;
pub mod name;
pub mod node;
pub mod skip;
pub mod source;
pub mod types;
pub mod validate;

/// Suffix appended to a type's simple name to form its binding name.
pub const BINDING_SUFFIX: &str = "Binding";

/// Prefix of every skip rule key.
pub const SKIP_PREFIX: &str = "skipAttribute.";

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        error::InventoryError,
        inventory::Inventory,
        name::QualifiedName,
        node::{Member, TypeDescriptor, TypeParam},
        skip::SkipPolicy,
        source::MemberSource,
        types::{MemberKind, Modifier, TypeRef},
    };
    pub use serde::{Deserialize, Serialize};
}
