use proc_macro::TokenStream;

mod bindable;
mod source;

/// Generates `<Name>Binding` next to a struct with named fields or a unit
/// struct.
///
/// Field attributes: `#[binding(skip)]` leaves the field out and
/// `#[binding(nested)]` binds through the field's own generated binding.
#[proc_macro_derive(Bindable, attributes(binding))]
pub fn derive_bindable(input: TokenStream) -> TokenStream {
    bindable::derive_bindable(input.into()).into()
}
