#![doc = include_str!("../README.md")]
#![no_std]

pub extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod hash;
mod reflection;

pub mod descriptor;
pub mod factory;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use reflection::Reflect;

// -----------------------------------------------------------------------------
// Macro support

/// Paths re-exported for the expansion of this crate's macros.
/// Not part of the public API.
#[doc(hidden)]
pub mod __macro_exports {
    pub use ::alloc;

    #[cfg(feature = "auto_register")]
    pub use ::inventory;
}
