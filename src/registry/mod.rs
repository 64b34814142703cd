//! The descriptor store a contract resolver draws from.
//!
//! ## Menu
//!
//! - [`DescriptorRegistry`]: stores one
//!   [`TypeDescriptor`](crate::descriptor::TypeDescriptor) per type, indexed
//!   by `TypeId`, full type path, and short type name.
//! - [`submit_type_descriptor!`](crate::submit_type_descriptor): declares a
//!   type for link-time collection (`auto_register` feature).
//!
//! ## auto_register
//!
//! See [`DescriptorRegistry::auto_register`].
//!
//! We use the [`inventory`] crate to implement static registration,
//! not all platforms support it (although major platforms do).
//!
//! The good news is that if it is not supported,
//! this function will directly return `false` without causing any errors.

// -----------------------------------------------------------------------------
// Modules

#[cfg(feature = "auto_register")]
mod auto_register;
mod descriptor_registry;

// -----------------------------------------------------------------------------
// Exports

#[cfg(feature = "auto_register")]
pub use auto_register::TypeDescriptorRegistration;
pub use descriptor_registry::DescriptorRegistry;
