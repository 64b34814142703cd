use crate::descriptor::{CallableDescriptor, MemberDescriptor, TypeDescriptor};
use crate::factory::{AccessorCreateError, DefaultConstructor, Getter, MethodCall};
use crate::factory::{ObjectConstructor, Setter};

// -----------------------------------------------------------------------------
// AccessorFactory

/// The contract through which an object-graph walker obtains bound accessors
/// for statically unknown types.
///
/// One implementation is selected at configuration time and shared
/// process-wide; every implementation is stateless and safe to call from any
/// thread. This crate ships the fully dynamic
/// [`LateBoundAccessorFactory`](crate::factory::LateBoundAccessorFactory);
/// a strategy that pre-compiles specialized accessors can implement the same
/// trait and be swapped in where runtime code generation is available.
///
/// Each operation takes its descriptor as an `Option`, accepting the direct
/// output of a registry lookup. A missing descriptor fails immediately with
/// [`AccessorCreateError::MissingDescriptor`], before any accessor exists.
/// No operation caches: every call derives a fresh accessor from the supplied
/// descriptor.
pub trait AccessorFactory: Send + Sync {
    /// Creates an accessor that constructs an instance from an ordered
    /// argument list.
    ///
    /// Accepts constructor descriptors and constructor-like static methods
    /// (the factory-method creation pattern); the latter are invoked with no
    /// receiver and their result is the instance.
    fn create_parameterized_constructor(
        &self,
        callable: Option<&CallableDescriptor>,
    ) -> Result<ObjectConstructor, AccessorCreateError>;

    /// Creates an accessor that invokes a callable through the uniform
    /// method-call shape.
    ///
    /// A constructor descriptor is accepted here too: the returned accessor
    /// ignores its receiver argument and constructs, so constructors can be
    /// driven through the same shape as methods.
    fn create_method_call(
        &self,
        callable: Option<&CallableDescriptor>,
    ) -> Result<MethodCall, AccessorCreateError>;

    /// Creates an accessor that constructs the type's default value.
    ///
    /// Types with an intrinsic default hook bypass constructor lookup.
    /// For every other type the zero-parameter constructor (public or
    /// non-public) is resolved *now*: when none exists this operation fails
    /// with [`AccessorCreateError::NoDefaultConstructor`] instead of handing
    /// out an accessor that would fail on every call.
    fn create_default_constructor(
        &self,
        ty: Option<&TypeDescriptor>,
    ) -> Result<DefaultConstructor, AccessorCreateError>;

    /// Creates an accessor that reads the member's current value from a
    /// receiver.
    fn create_getter(
        &self,
        member: Option<&MemberDescriptor>,
    ) -> Result<Getter, AccessorCreateError>;

    /// Creates an accessor that writes a value into the member on a receiver.
    ///
    /// A read-only member still yields an accessor; the failure is reported
    /// when that accessor is called.
    fn create_setter(
        &self,
        member: Option<&MemberDescriptor>,
    ) -> Result<Setter, AccessorCreateError>;
}
