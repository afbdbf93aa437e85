use alloc::string::String;
use core::fmt;

/// Enum lookup error
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// Index is past the last enumerator
    IndexOutOfRange { enum_name: &'static str, index: usize, size: usize },
    /// No enumerator has the given name
    NameNotFound { enum_name: &'static str, name: String },
    /// No enumerator has the given underlying value
    ValueNotFound { enum_name: &'static str, value: String },
    /// Enum value isn't listed in the descriptor
    ValueOutOfRange { enum_name: &'static str },
}

impl Error {
    /// Name of the enumeration type the lookup was done on
    pub fn enum_name(&self) -> &'static str {
        match self {
            Error::IndexOutOfRange { enum_name, .. } => *enum_name,
            Error::NameNotFound { enum_name, .. }    => *enum_name,
            Error::ValueNotFound { enum_name, .. }   => *enum_name,
            Error::ValueOutOfRange { enum_name }     => *enum_name,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfRange { enum_name, index, size } => f.write_fmt(format_args!("Enum index is out of range: {index} >= {size} for '{enum_name}'")),
            Error::NameNotFound { enum_name, name }           => f.write_fmt(format_args!("No enumerator named '{name}' in '{enum_name}'")),
            Error::ValueNotFound { enum_name, value }         => f.write_fmt(format_args!("No enumerator with value {value} in '{enum_name}'")),
            Error::ValueOutOfRange { enum_name }              => f.write_fmt(format_args!("Enum value is out of range for '{enum_name}'")),
        }
    }
}

impl core::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
