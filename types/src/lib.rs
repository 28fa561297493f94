//! Shared type definitions for the time-of-day column family
//!
//! This crate provides the syntactic layer used by the column crates:
//!
//! - [`TimeType`] - a parsed `Time` / `Time64` type descriptor
//! - [`TimeKind`] - which family member a descriptor names
//! - [`Precision`] - fractional second digits of a `Time64` column
//!
//! # Features
//!
//! - `std` - Standard library support (enabled by default)
//! - `alloc` - Allocator support for no_std environments
//! - `serde` - Enable serde serialization/deserialization

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

// Internal prelude for std/alloc compatibility
#[allow(unused_imports)]
pub(crate) mod alloc_prelude {
    #[cfg(feature = "std")]
    pub use std::{
        format,
        string::{String, ToString},
    };

    #[cfg(all(feature = "alloc", not(feature = "std")))]
    pub use alloc::{
        format,
        string::{String, ToString},
    };
}

mod precision;
mod time_type;

pub use precision::{Precision, PrecisionRangeError};
pub use time_type::{
    BINARY_TYPE_TIME64_UTC, BINARY_TYPE_TIME64_WITH_TIMEZONE, TimeKind, TimeType, TypeParseError,
};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{Precision, TimeKind, TimeType};
}
