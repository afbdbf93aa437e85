//! Enum descriptor and the trait that attaches it to an enum type

use core::fmt;

/// Trait implemented by every described enumeration.
///
/// Implementing it is what makes a type usable with the query functions in this crate, so a type that
/// was never described is rejected at compile time instead of failing at runtime.
///
/// The trait is normally implemented through `#[derive(EnumTraits)]`, [`x_enum!`](crate::x_enum) or
/// [`describe_enum!`](crate::describe_enum), but can also be written by hand:
///
/// ```
/// use xenum_base::{EnumDescriptor, EnumTraitsT};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// #[repr(u8)]
/// enum Axis { X, Y, Z }
///
/// impl EnumTraitsT for Axis {
///     type Underlying = u8;
///     const DESCRIPTOR: EnumDescriptor<Self, u8> = EnumDescriptor::new(
///         "Axis",
///         &[Axis::X, Axis::Y, Axis::Z],
///         &["X", "Y", "Z"],
///         &[Axis::X as u8, Axis::Y as u8, Axis::Z as u8],
///     );
///
///     fn to_underlying(self) -> u8 {
///         self as u8
///     }
/// }
///
/// assert_eq!(xenum_base::from_string::<Axis>("Y"), Ok(Axis::Y));
/// ```
pub trait EnumTraitsT: Copy + PartialEq + 'static {
    /// Underlying integer representation of the enum
    type Underlying: Copy + PartialEq + fmt::Debug + fmt::Display + 'static;

    /// Descriptor of the enum
    const DESCRIPTOR: EnumDescriptor<Self, Self::Underlying>;

    /// Reinterpret the enumerator as its underlying integer.
    fn to_underlying(self) -> Self::Underlying;
}

/// Compile-time metadata of an enumeration type.
///
/// All slices are index-aligned: `names()[i]` and `values()[i]` belong to `array()[i]`.
/// Lookups scan in declaration order and return the first match.
pub struct EnumDescriptor<E: 'static, U: 'static> {
    name   : &'static str,
    array  : &'static [E],
    names  : &'static [&'static str],
    values : &'static [U],
}

impl<E: 'static, U: 'static> EnumDescriptor<E, U> {
    /// Create a new descriptor.
    ///
    /// # Panics
    ///
    /// Panics (at const-evaluation time when used in a const) if the slices don't have the same length.
    pub const fn new(name: &'static str, array: &'static [E], names: &'static [&'static str], values: &'static [U]) -> Self {
        assert!(array.len() == names.len(), "enum descriptor: `names` must have one entry per enumerator");
        assert!(array.len() == values.len(), "enum descriptor: `values` must have one entry per enumerator");
        Self { name, array, names, values }
    }

    /// Name of the enumeration type
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Enumerators in declaration order
    pub const fn array(&self) -> &'static [E] {
        self.array
    }

    /// Declared names of the enumerators
    pub const fn names(&self) -> &'static [&'static str] {
        self.names
    }

    /// Underlying values of the enumerators
    pub const fn values(&self) -> &'static [U] {
        self.values
    }

    /// Number of enumerators
    pub const fn size(&self) -> usize {
        self.array.len()
    }

    /// Get the enumerator at `index`.
    pub fn get(&self, index: usize) -> Option<&'static E> {
        self.array.get(index)
    }

    /// Find the position of the first enumerator with the given name.
    pub fn find_name(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| *n == name)
    }
}

impl<E: PartialEq + 'static, U: 'static> EnumDescriptor<E, U> {
    /// Get the position of `enumer` in declaration order, or `None` if it isn't listed.
    pub fn position(&self, enumer: &E) -> Option<usize> {
        self.array.iter().position(|e| e == enumer)
    }

    /// Get the declared name of `enumer`.
    pub fn name_of(&self, enumer: &E) -> Option<&'static str> {
        self.position(enumer).map(|idx| self.names[idx])
    }
}

impl<E: 'static, U: PartialEq + 'static> EnumDescriptor<E, U> {
    /// Find the position of the first enumerator with the given underlying value.
    pub fn find_value(&self, value: &U) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }
}

// Manual impls, so `E` and `U` don't need to be `Clone`/`Copy` themselves
impl<E: 'static, U: 'static> Clone for EnumDescriptor<E, U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: 'static, U: 'static> Copy for EnumDescriptor<E, U> {}

impl<E: fmt::Debug + 'static, U: fmt::Debug + 'static> fmt::Debug for EnumDescriptor<E, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumDescriptor")
            .field("name", &self.name)
            .field("array", &self.array)
            .field("names", &self.names)
            .field("values", &self.values)
            .finish()
    }
}
