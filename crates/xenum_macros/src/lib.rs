//! Derives attaching a descriptor and related impls to a fieldless enum
//!
//! The generated code refers to `xenum_base`, so that crate needs to be a dependency of the crate using the derives.

mod derive;

use proc_macro::TokenStream;

/// Implement `xenum_base::EnumTraitsT` for a fieldless enum.
///
/// The underlying type is taken from `#[repr(..)]`, or `isize` when no integer repr is given.
/// The enum also needs to implement `Clone`, `Copy` and `PartialEq`.
#[proc_macro_derive(EnumTraits)]
pub fn enum_traits(item: TokenStream) -> TokenStream {
    derive::enum_traits(item.into()).into()
}

/// Implement `core::fmt::Display`, printing the name of the variant, or the value given with `#[display("...")]`.
#[proc_macro_derive(EnumDisplay, attributes(display))]
pub fn enum_display(item: TokenStream) -> TokenStream {
    derive::enum_display(item.into()).into()
}

/// Implement `core::str::FromStr` using `xenum_base::from_string`, requires `EnumTraits`.
#[proc_macro_derive(EnumFromStr)]
pub fn enum_from_str(item: TokenStream) -> TokenStream {
    derive::enum_from_str(item.into()).into()
}
