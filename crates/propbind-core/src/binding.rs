use crate::error::BindingError;

///
/// BindingInfo
///
/// Type-erased identity of one path segment. Used to walk a path upwards
/// without knowing the value types along the way.
///

pub trait BindingInfo {
    /// Property name of this segment; empty at the root.
    fn name(&self) -> &str;

    /// Static text of the leaf type.
    fn type_name(&self) -> &'static str;

    /// The segment one level up, `None` at the root.
    fn parent(&self) -> Option<&dyn BindingInfo>;

    /// Dotted path from the root, e.g. `address.city`.
    fn path(&self) -> String {
        let mut names = Vec::new();
        if !self.name().is_empty() {
            names.push(self.name().to_string());
        }

        let mut current = self.parent();
        while let Some(segment) = current {
            if !segment.name().is_empty() {
                names.push(segment.name().to_string());
            }
            current = segment.parent();
        }

        names.reverse();
        names.join(".")
    }
}

///
/// Binding
///
/// A property binding evaluated against the root instance it currently holds.
///

pub trait Binding<T>: BindingInfo {
    fn get(&self) -> Result<Option<T>, BindingError>;

    fn set(&self, value: T) -> Result<(), BindingError>;

    /// The binding one level up the path, or this binding at the root.
    fn root_binding(&self) -> &dyn BindingInfo;
}

///
/// BindingRoot
///
/// A binding that can also be evaluated against an explicitly supplied
/// root, so one path description serves many root instances.
///

pub trait BindingRoot<R, T>: Binding<T> {
    /// Fails with [`BindingError::Absent`] when an intermediate segment is
    /// absent; an absent leaf is `Ok(None)`.
    fn get_with_root(&self, root: &R) -> Result<Option<T>, BindingError>;

    /// Like [`BindingRoot::get_with_root`] but any absent prefix yields `None`.
    fn get_safely_with_root(&self, root: &R) -> Option<T>;

    fn set_with_root(&self, root: &mut R, value: T) -> Result<(), BindingError>;
}
