//! Descriptors the contract resolver hands to the access factory.
//!
//! ## Menu
//!
//! - [`CallableDescriptor`]: a constructor, static method, or instance method
//!   with an erased invoker.
//! - [`MemberDescriptor`]: a field or property with erased getter/setter.
//! - [`TypeDescriptor`]: one type's callables and members, plus an optional
//!   intrinsic default hook.
//! - [`GetTypeDescriptor`]: a trait through which a type publishes its own
//!   [`TypeDescriptor`].
//! - [`ArgList`]: the ordered argument list consumed by invokers.
//! - [`InvokeError`]: every failure an invocation can report at call time.
//!
//! Descriptors are plain data over `fn` pointers: cheap to clone, free of
//! shared mutable state, and safe to invoke from any number of call sites
//! concurrently.

// -----------------------------------------------------------------------------
// Modules

mod arg_list;
mod callable;
mod invoke_error;
mod member;
mod type_descriptor;

// -----------------------------------------------------------------------------
// Exports

pub use arg_list::ArgList;
pub use callable::{CallableDescriptor, CallableKind, InvokeFn, ParamDescriptor, Visibility};
pub use invoke_error::InvokeError;
pub use member::{GetFn, MemberDescriptor, MemberKind, SetFn};
pub use type_descriptor::{GetTypeDescriptor, TypeDescriptor};
