use crate::{prelude::*, source::MemberSource, validate::validate_types};
use std::{collections::BTreeMap, fs, path::Path};

///
/// Inventory
///
/// Member inventory read from a JSON document of the form
/// `{ "types": [ TypeDescriptor, .. ] }`.
///

#[derive(Clone, Debug, Default)]
pub struct Inventory {
    types: BTreeMap<QualifiedName, TypeDescriptor>,
}

#[derive(Deserialize)]
struct InventoryFile {
    #[serde(default)]
    types: Vec<TypeDescriptor>,
}

impl Inventory {
    /// Validate and index a set of descriptors.
    pub fn from_types<I>(types: I) -> Result<Self, InventoryError>
    where
        I: IntoIterator<Item = TypeDescriptor>,
    {
        let types = types.into_iter().collect::<Vec<_>>();
        validate_types(&types)?;

        Ok(Self {
            types: types.into_iter().map(|ty| (ty.name(), ty)).collect(),
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, InventoryError> {
        let file: InventoryFile = serde_json::from_str(json)?;

        Self::from_types(file.types)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, InventoryError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| InventoryError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&json)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl MemberSource for Inventory {
    fn descriptor(&self, name: &QualifiedName) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    fn bindable_types(&self) -> Vec<&TypeDescriptor> {
        self.types.values().filter(|ty| ty.bindable).collect()
    }
}

///
/// TESTS
///
