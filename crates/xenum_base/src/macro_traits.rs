//! Contains traits implemented for every described enum

use crate::{EnumTraitsT, enum_size, from_index_opt, from_string_opt};


/// Trait to get the number of elements in an enum
pub trait EnumCountT {
    /// Count or number of element in an enum
    const COUNT : usize;
}

/// Trait to get an enum from a given index
pub trait EnumFromIndexT: Sized {
    /// Try to convert an index to an enum
    fn from_idx(idx: usize) -> Option<Self>;

    /// Try to convert an index to an enum, if it couldn't convert it, return a default value
    fn from_idx_or(idx: usize, default: Self) -> Self;

    /// Convert an index to an enum, without checking bounds
    /// 
    /// # SAFETY
    /// 
    /// The user is required to make sure that the index is smaller than the number of enumerators
    unsafe fn from_idx_unchecked(idx: usize) -> Self;
}

pub trait EnumFromNameT: Sized {
    /// Try to parse the enum from a string slice.
    fn parse(s: &str) -> Option<Self>;
}

impl<E: EnumTraitsT> EnumCountT for E {
    const COUNT : usize = enum_size::<E>();
}

impl<E: EnumTraitsT> EnumFromIndexT for E {
    fn from_idx(idx: usize) -> Option<Self> {
        from_index_opt(idx)
    }

    fn from_idx_or(idx: usize, default: Self) -> Self {
        from_index_opt(idx).unwrap_or(default)
    }

    unsafe fn from_idx_unchecked(idx: usize) -> Self {
        debug_assert!(idx < enum_size::<E>());
        *E::DESCRIPTOR.array().get_unchecked(idx)
    }
}

impl<E: EnumTraitsT> EnumFromNameT for E {
    fn parse(s: &str) -> Option<Self> {
        from_string_opt(s)
    }
}
