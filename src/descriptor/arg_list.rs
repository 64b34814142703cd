use alloc::boxed::Box;
use alloc::collections::VecDeque;
use core::any::type_name;
use core::fmt;

use crate::Reflect;
use crate::descriptor::InvokeError;

// -----------------------------------------------------------------------------
// ArgList

/// An ordered argument list, consumed front-to-back by descriptor invokers.
///
/// Callers build the list in declaration order; invokers [`take`](Self::take)
/// one value per parameter and [`finish`](Self::finish) to reject leftovers.
/// No validation happens before the invoker runs: an arity or type mismatch
/// surfaces as an [`InvokeError`] from the call itself.
///
/// # Examples
///
/// ```
/// use reflect_access::descriptor::ArgList;
///
/// let mut args = ArgList::new().with(3_i32).with("four");
///
/// assert_eq!(args.take::<i32>(), Ok(3));
/// assert_eq!(args.take::<&str>(), Ok("four"));
/// assert!(args.finish().is_ok());
/// ```
#[derive(Default)]
pub struct ArgList {
    values: VecDeque<Box<dyn Reflect>>,
    // Number of values already taken; used for error indices.
    consumed: usize,
}

impl ArgList {
    /// Creates an empty argument list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            values: VecDeque::new(),
            consumed: 0,
        }
    }

    /// Appends an owned value, builder style.
    ///
    /// Passing an already boxed `Box<dyn Reflect>` here would nest the box;
    /// use [`with_boxed`](Self::with_boxed) for those.
    #[inline]
    pub fn with(mut self, value: impl Reflect) -> Self {
        self.values.push_back(Box::new(value));
        self
    }

    /// Appends an already erased value, builder style.
    #[inline]
    pub fn with_boxed(mut self, value: Box<dyn Reflect>) -> Self {
        self.values.push_back(value);
        self
    }

    /// Appends an owned value.
    #[inline]
    pub fn push(&mut self, value: impl Reflect) {
        self.values.push_back(Box::new(value));
    }

    /// Returns the number of remaining arguments.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no arguments remain.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Takes the next argument as type `T`.
    ///
    /// Fails with [`InvokeError::MissingArgument`] when the list is exhausted
    /// and [`InvokeError::ArgumentType`] when the value is of another type.
    pub fn take<T: Reflect>(&mut self) -> Result<T, InvokeError> {
        let index = self.consumed;
        let value = self
            .values
            .pop_front()
            .ok_or(InvokeError::MissingArgument { index })?;
        self.consumed += 1;

        value.take::<T>().map_err(|value| InvokeError::ArgumentType {
            index,
            expected: type_name::<T>(),
            actual: (*value).type_path(),
        })
    }

    /// Takes the next argument still erased.
    pub fn take_boxed(&mut self) -> Result<Box<dyn Reflect>, InvokeError> {
        let index = self.consumed;
        let value = self
            .values
            .pop_front()
            .ok_or(InvokeError::MissingArgument { index })?;
        self.consumed += 1;
        Ok(value)
    }

    /// Asserts that every argument has been consumed.
    ///
    /// Fails with [`InvokeError::ExtraArguments`] otherwise.
    pub fn finish(&self) -> Result<(), InvokeError> {
        if self.values.is_empty() {
            Ok(())
        } else {
            Err(InvokeError::ExtraArguments {
                expected: self.consumed,
                actual: self.consumed + self.values.len(),
            })
        }
    }
}

impl fmt::Debug for ArgList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.values.iter().map(|value| (**value).type_path()))
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::ArgList;
    use crate::descriptor::InvokeError;

    #[test]
    fn takes_in_insertion_order() {
        let mut args = ArgList::new().with(1_u8).with(2_u16).with(3_u32);

        assert_eq!(args.take::<u8>(), Ok(1));
        assert_eq!(args.take::<u16>(), Ok(2));
        assert_eq!(args.take::<u32>(), Ok(3));
        assert!(args.finish().is_ok());
    }

    #[test]
    fn exhausted_list_reports_index() {
        let mut args = ArgList::new().with(1_i32);
        args.take::<i32>().unwrap();

        assert_eq!(
            args.take::<i32>(),
            Err(InvokeError::MissingArgument { index: 1 })
        );
    }

    #[test]
    fn type_mismatch_names_both_types() {
        let mut args = ArgList::new().with(1_i32);

        assert_eq!(
            args.take::<bool>(),
            Err(InvokeError::ArgumentType {
                index: 0,
                expected: "bool",
                actual: "i32",
            })
        );
    }

    #[test]
    fn finish_rejects_leftovers() {
        let mut args = ArgList::new().with(1_i32).with(2_i32);
        args.take::<i32>().unwrap();

        assert_eq!(
            args.finish(),
            Err(InvokeError::ExtraArguments {
                expected: 1,
                actual: 2,
            })
        );
    }
}
