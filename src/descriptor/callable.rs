use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::{Any, TypeId, type_name};

use crate::Reflect;
use crate::descriptor::{ArgList, InvokeError};

// -----------------------------------------------------------------------------
// InvokeFn

/// The erased invoker stored by every [`CallableDescriptor`].
///
/// The receiver is `None` for constructors and static methods; an instance
/// method given `None` fails with [`InvokeError::MissingReceiver`]. A result
/// of `Ok(None)` is the "no value" marker for unit-returning calls.
pub type InvokeFn =
    fn(Option<&mut dyn Reflect>, ArgList) -> Result<Option<Box<dyn Reflect>>, InvokeError>;

// -----------------------------------------------------------------------------
// CallableKind / Visibility

/// What kind of runtime call a [`CallableDescriptor`] performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallableKind {
    /// Produces a fresh instance; ignores any receiver.
    Constructor,
    /// An associated function; ignores any receiver.
    StaticMethod,
    /// Operates on a receiver instance.
    InstanceMethod,
}

/// Whether a callable is part of its type's public surface.
///
/// Default construction deliberately reaches non-public constructors too,
/// so serialization can rebuild types that hide their constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    NonPublic,
}

// -----------------------------------------------------------------------------
// ParamDescriptor

/// One declared parameter of a [`CallableDescriptor`].
#[derive(Debug, Clone)]
pub struct ParamDescriptor {
    name: &'static str,
    ty_id: TypeId,
    type_path: &'static str,
}

impl ParamDescriptor {
    /// Creates a parameter named `name` of type `T`.
    #[inline]
    pub fn new<T: Any>(name: &'static str) -> Self {
        Self {
            name,
            ty_id: TypeId::of::<T>(),
            type_path: type_name::<T>(),
        }
    }

    /// Returns the parameter name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the `TypeId` of the parameter type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Returns the full path of the parameter type.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Check if the given type matches this parameter.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }
}

// -----------------------------------------------------------------------------
// CallableDescriptor

/// A constructor, static method, or instance method, resolvable and invocable
/// at runtime through its erased [`InvokeFn`].
///
/// The descriptor itself performs no validation: parameter metadata is
/// informational, and every mismatch is discovered by the invoker at call
/// time. Cloning is cheap (the invoker is a plain `fn` pointer).
///
/// # Examples
///
/// ```
/// use reflect_access::descriptor::{ArgList, CallableDescriptor, ParamDescriptor};
///
/// let ctor = CallableDescriptor::constructor(
///     "new",
///     vec![ParamDescriptor::new::<u32>("seconds")],
///     |_, mut args| {
///         let seconds = args.take::<u32>()?;
///         args.finish()?;
///         Ok(Some(Box::new(core::time::Duration::from_secs(seconds as u64))))
///     },
/// );
///
/// let out = ctor.invoke(None, ArgList::new().with(90_u32)).unwrap();
/// let duration = out.unwrap().take::<core::time::Duration>().unwrap();
/// assert_eq!(duration.as_secs(), 90);
/// ```
#[derive(Debug, Clone)]
pub struct CallableDescriptor {
    name: &'static str,
    kind: CallableKind,
    visibility: Visibility,
    params: Box<[ParamDescriptor]>,
    invoke: InvokeFn,
}

impl CallableDescriptor {
    /// Creates a public constructor descriptor.
    #[inline]
    pub fn constructor(
        name: &'static str,
        params: Vec<ParamDescriptor>,
        invoke: InvokeFn,
    ) -> Self {
        Self::new(name, CallableKind::Constructor, params, invoke)
    }

    /// Creates a public static method descriptor.
    #[inline]
    pub fn static_method(
        name: &'static str,
        params: Vec<ParamDescriptor>,
        invoke: InvokeFn,
    ) -> Self {
        Self::new(name, CallableKind::StaticMethod, params, invoke)
    }

    /// Creates a public instance method descriptor.
    #[inline]
    pub fn method(name: &'static str, params: Vec<ParamDescriptor>, invoke: InvokeFn) -> Self {
        Self::new(name, CallableKind::InstanceMethod, params, invoke)
    }

    fn new(
        name: &'static str,
        kind: CallableKind,
        params: Vec<ParamDescriptor>,
        invoke: InvokeFn,
    ) -> Self {
        Self {
            name,
            kind,
            visibility: Visibility::Public,
            params: params.into_boxed_slice(),
            invoke,
        }
    }

    /// Marks the callable with the given visibility, builder style.
    #[inline]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Returns the callable name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the kind of call this descriptor performs.
    #[inline]
    pub const fn kind(&self) -> CallableKind {
        self.kind
    }

    /// Returns the callable's visibility.
    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns the declared parameters, in call order.
    #[inline]
    pub fn params(&self) -> &[ParamDescriptor] {
        &self.params
    }

    /// Returns the number of declared parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` for [`CallableKind::Constructor`] descriptors.
    #[inline]
    pub fn is_constructor(&self) -> bool {
        self.kind == CallableKind::Constructor
    }

    /// Performs the underlying call.
    ///
    /// Every failure comes from the erased invoker; the descriptor adds
    /// nothing of its own.
    #[inline]
    pub fn invoke(
        &self,
        receiver: Option<&mut dyn Reflect>,
        args: ArgList,
    ) -> Result<Option<Box<dyn Reflect>>, InvokeError> {
        (self.invoke)(receiver, args)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{CallableDescriptor, CallableKind, ParamDescriptor, Visibility};
    use crate::descriptor::{ArgList, InvokeError};
    use alloc::boxed::Box;
    use alloc::vec;

    #[test]
    fn constructor_invokes_with_arguments() {
        let ctor = CallableDescriptor::constructor(
            "new",
            vec![ParamDescriptor::new::<i32>("value")],
            |_, mut args| {
                let value = args.take::<i32>()?;
                args.finish()?;
                Ok(Some(Box::new(value * 2)))
            },
        );

        assert!(ctor.is_constructor());
        assert_eq!(ctor.arity(), 1);
        assert_eq!(ctor.visibility(), Visibility::Public);
        assert!(ctor.params()[0].type_is::<i32>());

        let out = ctor.invoke(None, ArgList::new().with(21_i32)).unwrap();
        assert_eq!(out.unwrap().take::<i32>().unwrap(), 42);
    }

    #[test]
    fn instance_method_requires_receiver() {
        let method = CallableDescriptor::method("double", vec![], |receiver, args| {
            args.finish()?;
            let receiver = receiver.ok_or(InvokeError::missing_receiver("double"))?;
            let value = receiver
                .downcast_mut::<i32>()
                .ok_or(InvokeError::ReceiverType {
                    expected: "i32",
                    actual: "unknown",
                })?;
            *value *= 2;
            Ok(None)
        });

        assert_eq!(method.kind(), CallableKind::InstanceMethod);

        let mut receiver = 10_i32;
        let out = method
            .invoke(Some(&mut receiver), ArgList::new())
            .unwrap();
        assert!(out.is_none());
        assert_eq!(receiver, 20);

        assert_eq!(
            method.invoke(None, ArgList::new()).unwrap_err(),
            InvokeError::missing_receiver("double")
        );
    }
}
