//! Runtime side of generated property bindings.
//!
//! Generated `<Type>Binding` structs wrap a [`PathBinding`] rooted at the
//! type and add one accessor per property. Accessors compose lazily: each
//! call to [`PathBinding::then`] returns a longer path that still evaluates
//! against any root instance.

pub mod accessor;
pub mod binding;
pub mod callable;
pub mod error;
pub mod path;

pub use accessor::Accessor;
pub use binding::{Binding, BindingInfo, BindingRoot};
pub use callable::CallableBinding;
pub use error::BindingError;
pub use path::{PathBinding, ValueBinding};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        accessor::Accessor,
        binding::{Binding, BindingInfo, BindingRoot},
        callable::CallableBinding,
        error::BindingError,
        path::{PathBinding, ValueBinding},
    };
}
