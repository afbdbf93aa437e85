//! Compile-time enum reflection: descriptors and lookups, usable with `#![no_std]`
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod descriptor;
pub use descriptor::*;

mod error;
pub use error::*;

mod query;
pub use query::*;

mod macro_traits;
pub use macro_traits::*;

mod helper_macros;
