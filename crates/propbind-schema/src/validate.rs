//! Structural checks applied to an inventory before any generation.

use crate::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

/// Validate a set of descriptors, collecting every problem.
pub fn validate_types(types: &[TypeDescriptor]) -> Result<(), InventoryError> {
    let mut errs = Vec::new();
    let mut seen = BTreeMap::new();

    for ty in types {
        validate_descriptor(ty, &mut errs);

        if let Some(prev) = seen.insert(ty.name(), ty.path.as_str()) {
            errs.push(format!(
                "duplicate type '{}' (also declared as '{prev}')",
                ty.path
            ));
        }
    }

    if errs.is_empty() {
        Ok(())
    } else {
        Err(InventoryError::Invalid(errs))
    }
}

pub fn validate_descriptor(ty: &TypeDescriptor, errs: &mut Vec<String>) {
    if ty.name().is_empty() {
        errs.push(format!("type path '{}' is empty", ty.path));
        return;
    }

    let mut params = BTreeSet::new();
    for param in &ty.type_params {
        if param.name.trim().is_empty() {
            errs.push(format!("{}: type parameter without a name", ty.path));
        } else if !params.insert(param.name.as_str()) {
            errs.push(format!(
                "{}: duplicate type parameter '{}'",
                ty.path, param.name
            ));
        }
    }

    for member in &ty.members {
        if member.name.trim().is_empty() {
            errs.push(format!("{}: member without a name", ty.path));
        }
        if member.is_field() && !member.params.is_empty() {
            errs.push(format!(
                "{}: field '{}' cannot take parameters",
                ty.path, member.name
            ));
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_every_problem() {
        let ty = TypeDescriptor::new("Foo")
            .with_type_param(TypeParam::new("T"))
            .with_type_param(TypeParam::new("T"))
            .with_member(Member::field("", "i32"))
            .with_member(Member::field("x", "i32").with_param("i32"));

        let mut errs = Vec::new();
        validate_descriptor(&ty, &mut errs);

        assert_eq!(errs.len(), 3);
    }

    #[test]
    fn empty_path_is_invalid() {
        let err = validate_types(&[TypeDescriptor::new("::")]).unwrap_err();

        assert!(err.to_string().contains("empty"));
    }
}
