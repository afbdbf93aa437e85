//! Free lookup functions over described enums
//!
//! Every conversion that can fail comes in two forms: a plain one returning [`Result`], and an `_opt`
//! one returning an [`Option`]. Lookups scan the descriptor in declaration order and the first match wins.

use alloc::string::ToString;

use crate::{EnumDescriptor, EnumTraitsT, Error, Result};

/// Get the descriptor of `E`
pub const fn enum_descriptor<E: EnumTraitsT>() -> EnumDescriptor<E, E::Underlying> {
    E::DESCRIPTOR
}

/// Get the name of the enumeration type
pub const fn enum_name<E: EnumTraitsT>() -> &'static str {
    E::DESCRIPTOR.name()
}

/// Get all enumerators, in declaration order
pub const fn enum_array<E: EnumTraitsT>() -> &'static [E] {
    E::DESCRIPTOR.array()
}

/// Get the names of all enumerators, in declaration order
pub const fn enum_names<E: EnumTraitsT>() -> &'static [&'static str] {
    E::DESCRIPTOR.names()
}

/// Get the underlying values of all enumerators, in declaration order
pub const fn enum_values<E: EnumTraitsT>() -> &'static [E::Underlying] {
    E::DESCRIPTOR.values()
}

/// Get the number of enumerators
pub const fn enum_size<E: EnumTraitsT>() -> usize {
    E::DESCRIPTOR.size()
}

/// Iterate over all enumerators, in declaration order
pub fn iter<E: EnumTraitsT>() -> core::iter::Copied<core::slice::Iter<'static, E>> {
    E::DESCRIPTOR.array().iter().copied()
}

/// Get the declared name of `enumer`, or `None` if the descriptor doesn't list it.
pub fn to_string_opt<E: EnumTraitsT>(enumer: E) -> Option<&'static str> {
    E::DESCRIPTOR.name_of(&enumer)
}

/// Get the declared name of `enumer`.
pub fn to_string<E: EnumTraitsT>(enumer: E) -> Result<&'static str> {
    to_string_opt(enumer).ok_or(Error::ValueOutOfRange { enum_name: enum_name::<E>() })
}

/// Get the underlying integer value of `enumer`.
pub fn to_value<E: EnumTraitsT>(enumer: E) -> E::Underlying {
    enumer.to_underlying()
}

/// Get the position of `enumer` in declaration order.
///
/// Returns [`enum_size`] when the descriptor doesn't list the enumerator.
pub fn to_index<E: EnumTraitsT>(enumer: E) -> usize {
    E::DESCRIPTOR.position(&enumer).unwrap_or(enum_size::<E>())
}

/// Get the enumerator at `index`, or `None` if `index >= enum_size()`.
pub fn from_index_opt<E: EnumTraitsT>(index: usize) -> Option<E> {
    E::DESCRIPTOR.get(index).copied()
}

/// Get the enumerator at `index`.
pub fn from_index<E: EnumTraitsT>(index: usize) -> Result<E> {
    from_index_opt(index).ok_or(Error::IndexOutOfRange { enum_name: enum_name::<E>(), index, size: enum_size::<E>() })
}

/// Get the enumerator named exactly `name` (case-sensitive), or `None`.
pub fn from_string_opt<E: EnumTraitsT>(name: &str) -> Option<E> {
    E::DESCRIPTOR.find_name(name).map(|idx| enum_array::<E>()[idx])
}

/// Get the enumerator named exactly `name` (case-sensitive).
pub fn from_string<E: EnumTraitsT>(name: &str) -> Result<E> {
    from_string_opt(name).ok_or_else(|| Error::NameNotFound { enum_name: enum_name::<E>(), name: name.to_string() })
}

/// Get the enumerator with the underlying value `value`, or `None`.
///
/// `value` has to be listed in the descriptor. The result is the enumerator whose own underlying value is `value`,
/// falling back to the enumerator at the matching position when the descriptor lists none.
pub fn from_value_opt<E: EnumTraitsT>(value: E::Underlying) -> Option<E> {
    let idx = E::DESCRIPTOR.find_value(&value)?;
    iter::<E>().find(|enumer| enumer.to_underlying() == value).or(Some(enum_array::<E>()[idx]))
}

/// Get the enumerator with the underlying value `value`.
pub fn from_value<E: EnumTraitsT>(value: E::Underlying) -> Result<E> {
    from_value_opt(value).ok_or_else(|| Error::ValueNotFound { enum_name: enum_name::<E>(), value: value.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::x_enum! {
        #[derive(Debug)]
        enum Color {
            Red,
            Green = 5,
            Blue,
        }
    }

    crate::x_enum! {
        #[derive(Debug)]
        enum Level: i8 {
            Low = -1,
            Mid,
            High = 10,
        }
    }

    #[test]
    fn color_descriptor() {
        assert_eq!(enum_name::<Color>(), "Color");
        assert_eq!(enum_size::<Color>(), 3);
        assert_eq!(enum_array::<Color>(), &[Color::Red, Color::Green, Color::Blue]);
        assert_eq!(enum_names::<Color>(), &["Red", "Green", "Blue"]);
        assert_eq!(enum_values::<Color>(), &[0, 5, 6]);
    }

    #[test]
    fn color_lookups() {
        assert_eq!(to_string(Color::Green), Ok("Green"));
        assert_eq!(to_string_opt(Color::Red), Some("Red"));
        assert_eq!(to_value(Color::Blue), 6);
        assert_eq!(to_index(Color::Blue), 2);

        assert_eq!(from_value::<Color>(6), Ok(Color::Blue));
        assert_eq!(from_value_opt::<Color>(7), None);
        assert_eq!(from_value::<Color>(7), Err(Error::ValueNotFound { enum_name: "Color", value: "7".to_string() }));

        assert_eq!(from_index::<Color>(1), Ok(Color::Green));
        assert_eq!(from_index_opt::<Color>(3), None);
        assert_eq!(from_index::<Color>(3), Err(Error::IndexOutOfRange { enum_name: "Color", index: 3, size: 3 }));

        assert_eq!(from_string::<Color>("Red"), Ok(Color::Red));
        assert_eq!(from_string_opt::<Color>("red"), None);
        assert_eq!(from_string::<Color>("RED"), Err(Error::NameNotFound { enum_name: "Color", name: "RED".to_string() }));
    }

    #[test]
    fn signed_underlying() {
        assert_eq!(enum_values::<Level>(), &[-1i8, 0, 10]);
        assert_eq!(to_value(Level::Low), -1i8);
        assert_eq!(from_value::<Level>(0), Ok(Level::Mid));
        assert_eq!(from_value_opt::<Level>(1), None);
    }

    #[test]
    fn round_trips() {
        for (idx, enumer) in iter::<Color>().enumerate() {
            assert_eq!(to_index(enumer), idx);
            assert_eq!(from_index::<Color>(idx), Ok(enumer));
            assert_eq!(from_string::<Color>(enum_names::<Color>()[idx]), Ok(enumer));
            assert_eq!(from_value::<Color>(enum_values::<Color>()[idx]), Ok(enumer));
            assert_eq!(to_string(enumer), Ok(enum_names::<Color>()[idx]));
            assert_eq!(to_value(enumer), enum_values::<Color>()[idx]);
        }
    }

    #[test]
    fn repeated_lookups_are_stable() {
        for _ in 0..3 {
            assert_eq!(from_string::<Color>("Blue"), Ok(Color::Blue));
            assert_eq!(to_index(Color::Green), 1);
            assert_eq!(from_value_opt::<Color>(4), None);
        }
    }
}
