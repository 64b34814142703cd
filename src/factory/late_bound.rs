use alloc::boxed::Box;

use crate::descriptor::{ArgList, CallableDescriptor, InvokeError};
use crate::descriptor::{MemberDescriptor, TypeDescriptor};
use crate::factory::{AccessorCreateError, AccessorFactory, DescriptorKind};
use crate::factory::{DefaultConstructor, Getter, MethodCall, ObjectConstructor, Setter};

// -----------------------------------------------------------------------------
// LateBoundAccessorFactory

/// The fully dynamic [`AccessorFactory`] strategy.
///
/// Every accessor it returns re-resolves and re-dispatches through the
/// descriptor's erased invoker on every single call. Nothing is specialized,
/// generated, or cached, which keeps this strategy correct on targets where
/// producing executable code at runtime is unavailable, at the cost of
/// dynamic dispatch per call.
///
/// Creation is eager only in validation: the descriptor's presence (and, for
/// default construction, the constructor's existence) is checked up front,
/// while all invocation work is deferred into the returned accessor.
///
/// The factory is a stateless unit value; [`instance`](Self::instance)
/// returns the process-wide shared one.
///
/// # Examples
///
/// ```
/// use reflect_access::descriptor::TypeDescriptor;
/// use reflect_access::factory::{AccessorFactory, LateBoundAccessorFactory};
///
/// let factory = LateBoundAccessorFactory::instance();
/// let descriptor = TypeDescriptor::of::<u32>().with_default::<u32>();
///
/// let construct = factory.create_default_constructor(Some(&descriptor)).unwrap();
/// let value = construct().unwrap();
/// assert_eq!(value.take::<u32>().unwrap(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LateBoundAccessorFactory;

static INSTANCE: LateBoundAccessorFactory = LateBoundAccessorFactory;

impl LateBoundAccessorFactory {
    /// Returns the process-wide shared instance as the polymorphic contract.
    #[inline]
    pub fn instance() -> &'static dyn AccessorFactory {
        &INSTANCE
    }
}

impl AccessorFactory for LateBoundAccessorFactory {
    fn create_parameterized_constructor(
        &self,
        callable: Option<&CallableDescriptor>,
    ) -> Result<ObjectConstructor, AccessorCreateError> {
        let callable = required(callable, DescriptorKind::Callable)?.clone();

        Ok(Box::new(move |args| {
            callable
                .invoke(None, args)?
                .ok_or_else(|| InvokeError::NoReturnValue {
                    callable: callable.name(),
                })
        }))
    }

    fn create_method_call(
        &self,
        callable: Option<&CallableDescriptor>,
    ) -> Result<MethodCall, AccessorCreateError> {
        let callable = required(callable, DescriptorKind::Callable)?.clone();

        if callable.is_constructor() {
            // Constructors driven through the method-call shape never touch
            // the receiver.
            Ok(Box::new(move |_receiver, args| callable.invoke(None, args)))
        } else {
            Ok(Box::new(move |receiver, args| {
                callable.invoke(receiver, args)
            }))
        }
    }

    fn create_default_constructor(
        &self,
        ty: Option<&TypeDescriptor>,
    ) -> Result<DefaultConstructor, AccessorCreateError> {
        let ty = required(ty, DescriptorKind::Type)?;

        if let Some(hook) = ty.default_hook() {
            return Ok(Box::new(move || Ok(hook())));
        }

        // Resolved now, not at accessor-call time: a type that cannot be
        // default-constructed is reported once, here, naming the type.
        let constructor = ty
            .default_constructor()
            .cloned()
            .ok_or_else(|| AccessorCreateError::NoDefaultConstructor {
                type_path: ty.type_path(),
            })?;

        Ok(Box::new(move || {
            constructor
                .invoke(None, ArgList::new())?
                .ok_or_else(|| InvokeError::NoReturnValue {
                    callable: constructor.name(),
                })
        }))
    }

    fn create_getter(
        &self,
        member: Option<&MemberDescriptor>,
    ) -> Result<Getter, AccessorCreateError> {
        let member = required(member, DescriptorKind::Member)?.clone();

        Ok(Box::new(move |receiver| member.get(receiver)))
    }

    fn create_setter(
        &self,
        member: Option<&MemberDescriptor>,
    ) -> Result<Setter, AccessorCreateError> {
        let member = required(member, DescriptorKind::Member)?.clone();

        Ok(Box::new(move |receiver, value| member.set(receiver, value)))
    }
}

#[inline]
fn required<T>(descriptor: Option<&T>, expected: DescriptorKind) -> Result<&T, AccessorCreateError> {
    descriptor.ok_or(AccessorCreateError::MissingDescriptor { expected })
}

// -----------------------------------------------------------------------------
// Tests
