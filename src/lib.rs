//! Compile-time enum reflection
//!
//! Declare an enum with `#[derive(EnumTraits)]` or [`x_enum!`], or attach a descriptor to an existing enum with
//! [`describe_enum!`], then convert between enumerators, their names, their positions and their underlying values:
//!
//! ```
//! use xenum::EnumTraits;
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Debug, EnumTraits)]
//! enum Color {
//!     Red,
//!     Green = 5,
//!     Blue,
//! }
//!
//! assert_eq!(xenum::enum_names::<Color>(), &["Red", "Green", "Blue"]);
//! assert_eq!(xenum::to_string(Color::Green), Ok("Green"));
//! assert_eq!(xenum::from_value::<Color>(6), Ok(Color::Blue));
//! assert_eq!(xenum::from_value_opt::<Color>(7), None);
//! assert_eq!(xenum::to_index(Color::Blue), 2);
//! ```
//!
//! The derives generate code referring to `xenum_base`, which therefore also needs to be a dependency.

pub use xenum_base::*;
pub use xenum_macros::{EnumTraits, EnumDisplay, EnumFromStr};
