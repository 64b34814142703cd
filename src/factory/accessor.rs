use alloc::boxed::Box;

use crate::Reflect;
use crate::descriptor::{ArgList, InvokeError};

// -----------------------------------------------------------------------------
// Bound accessor shapes
//
// Every accessor is a stateless boxed closure: it holds a clone of the
// descriptor it was created from and nothing else, so it may be invoked any
// number of times, from any number of threads, with no coordination.

/// Constructs an instance from an ordered argument list.
///
/// Created by
/// [`AccessorFactory::create_parameterized_constructor`](crate::factory::AccessorFactory::create_parameterized_constructor).
pub type ObjectConstructor =
    Box<dyn Fn(ArgList) -> Result<Box<dyn Reflect>, InvokeError> + Send + Sync>;

/// Invokes a callable with an optional receiver and an ordered argument list.
///
/// `Ok(None)` is the "no value" marker for unit-returning calls. Created by
/// [`AccessorFactory::create_method_call`](crate::factory::AccessorFactory::create_method_call).
pub type MethodCall = Box<
    dyn Fn(Option<&mut dyn Reflect>, ArgList) -> Result<Option<Box<dyn Reflect>>, InvokeError>
        + Send
        + Sync,
>;

/// Constructs an instance of the bound type with no arguments.
///
/// Created by
/// [`AccessorFactory::create_default_constructor`](crate::factory::AccessorFactory::create_default_constructor).
pub type DefaultConstructor =
    Box<dyn Fn() -> Result<Box<dyn Reflect>, InvokeError> + Send + Sync>;

/// Reads the bound member's current value from a receiver.
///
/// Created by
/// [`AccessorFactory::create_getter`](crate::factory::AccessorFactory::create_getter).
pub type Getter = Box<dyn Fn(&dyn Reflect) -> Result<Box<dyn Reflect>, InvokeError> + Send + Sync>;

/// Writes a value into the bound member on a receiver.
///
/// Created by
/// [`AccessorFactory::create_setter`](crate::factory::AccessorFactory::create_setter).
pub type Setter =
    Box<dyn Fn(&mut dyn Reflect, Box<dyn Reflect>) -> Result<(), InvokeError> + Send + Sync>;
