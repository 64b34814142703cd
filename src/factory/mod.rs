//! The accessor factory contract and its late-bound implementation.
//!
//! ## Menu
//!
//! - [`AccessorFactory`]: the polymorphic contract a serialization engine
//!   resolves accessors through; strategies are selected at configuration
//!   time.
//! - [`LateBoundAccessorFactory`]: the fully dynamic strategy shipped by this
//!   crate, which re-dispatches through descriptor invokers on every call.
//! - [`AccessorCreateError`]: the failures a `create_*` operation can report
//!   before any accessor exists.
//! - Accessor shapes: [`ObjectConstructor`], [`MethodCall`],
//!   [`DefaultConstructor`], [`Getter`], [`Setter`].

// -----------------------------------------------------------------------------
// Modules

mod accessor;
mod contract;
mod create_error;
mod late_bound;

// -----------------------------------------------------------------------------
// Exports

pub use accessor::{DefaultConstructor, Getter, MethodCall, ObjectConstructor, Setter};
pub use contract::AccessorFactory;
pub use create_error::{AccessorCreateError, DescriptorKind};
pub use late_bound::LateBoundAccessorFactory;
