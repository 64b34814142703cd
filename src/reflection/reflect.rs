use alloc::boxed::Box;
use core::any::{Any, TypeId, type_name};
use core::fmt;

// -----------------------------------------------------------------------------
// Reflect

/// The erased value type that crosses every accessor boundary.
///
/// Constructed instances, member values, and call arguments all travel as
/// `Box<dyn Reflect>` (or references to `dyn Reflect`), so the object-graph
/// walker can move values around without knowing their concrete types.
/// Descriptor invokers recover the concrete type with the downcasting
/// helpers on `dyn Reflect`.
///
/// The trait is blanket-implemented for every `Any + Send + Sync` type;
/// nothing has to be derived or registered just to act as a value.
///
/// # Type Identification
///
/// While `Reflect` supports [`Any`], note that [`Any::type_id`] on a
/// `Box<dyn Reflect>` returns the container's type ID, not the inner value's.
/// Use [`Reflect::ty_id`] on the dereferenced value instead:
///
/// ```
/// use reflect_access::Reflect;
/// use core::any::{Any, TypeId};
///
/// let x: Box<dyn Reflect> = Box::new(32_i32);
///
/// assert!(x.type_id() != TypeId::of::<i32>());     // Container type ID
/// assert!((*x).ty_id() == TypeId::of::<i32>());    // Inner value
/// ```
///
/// # Downcasting
///
/// ```
/// use reflect_access::Reflect;
///
/// let x: Box<dyn Reflect> = Box::new(10_i32);
/// assert_eq!(x.downcast_ref::<i32>(), Some(&10));
/// assert_eq!(x.take::<i32>().unwrap(), 10);
/// ```
pub trait Reflect: Any + Send + Sync {
    /// Returns the full path of the underlying type.
    fn type_path(&self) -> &'static str;

    /// Returns the [`TypeId`] of the underlying type.
    fn ty_id(&self) -> TypeId;

    /// Returns the value as a [`&dyn Any`](Any).
    fn as_any(&self) -> &dyn Any;

    /// Returns the value as a [`&mut dyn Any`](Any).
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Returns the boxed value as a [`Box<dyn Any>`](Any).
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any + Send + Sync> Reflect for T {
    #[inline]
    fn type_path(&self) -> &'static str {
        type_name::<T>()
    }

    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    #[inline]
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

// -----------------------------------------------------------------------------
// dyn Reflect helpers

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn represents<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts to a shared reference of type `T`, or `None` on mismatch.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// Downcasts to a mutable reference of type `T`, or `None` on mismatch.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }

    /// Takes the underlying value out of the box as type `T`.
    ///
    /// On mismatch the box is returned unchanged.
    pub fn take<T: Any>(self: Box<Self>) -> Result<T, Box<dyn Reflect>> {
        if self.represents::<T>() {
            // the id was checked just above
            Ok(*self.into_any().downcast::<T>().unwrap())
        } else {
            Err(self)
        }
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reflect({})", self.type_path())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Reflect;
    use alloc::boxed::Box;
    use alloc::string::String;

    #[test]
    fn downcast_and_take() {
        let mut value: Box<dyn Reflect> = Box::new(String::from("late"));

        assert!((*value).represents::<String>());
        assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("late"));

        value.downcast_mut::<String>().unwrap().push_str("-bound");
        assert_eq!(value.take::<String>().unwrap(), "late-bound");
    }

    #[test]
    fn take_mismatch_returns_value() {
        let value: Box<dyn Reflect> = Box::new(7_u8);

        let back = value.take::<u16>().unwrap_err();
        assert_eq!(back.take::<u8>().unwrap(), 7);
    }

    #[test]
    fn type_path_names_the_inner_type() {
        let value: Box<dyn Reflect> = Box::new(1.5_f64);
        assert_eq!((*value).type_path(), "f64");
    }
}
