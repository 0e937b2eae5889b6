//! ## Crate layout
//! - `core`: the binding runtime generated code compiles against.
//! - `Bindable`: derive generating `<Name>Binding` for a struct.
//!
//! Bindings for types described by a JSON inventory are generated from a
//! build script with `propbind_build::build!`.

pub use propbind_core as core;
pub use propbind_derive::Bindable;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Bindable,
        core::{Binding, BindingError, BindingInfo, BindingRoot, CallableBinding, PathBinding},
    };
}
