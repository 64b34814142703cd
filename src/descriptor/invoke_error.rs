use alloc::borrow::Cow;
use core::any::{Any, type_name};
use core::fmt;

// -----------------------------------------------------------------------------
// InvokeError

/// An enumeration of all error outcomes that might happen when a bound
/// accessor is invoked.
///
/// These are strictly *call-time* failures: they are produced by descriptor
/// invokers (or by [`ArgList`](crate::descriptor::ArgList) helpers on their
/// behalf) and propagated through accessors unchanged. Failures detectable
/// while an accessor is being *created* are
/// [`AccessorCreateError`](crate::factory::AccessorCreateError) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvokeError {
    /// The argument list ran out before the invoker consumed its parameters.
    MissingArgument { index: usize },
    /// The argument list held more values than the invoker consumed.
    ExtraArguments { expected: usize, actual: usize },
    /// An argument held a different type than the parameter requires.
    ArgumentType {
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },
    /// The value passed to a setter held a different type than the member.
    ValueType {
        expected: &'static str,
        actual: &'static str,
    },
    /// An instance method was invoked without a receiver.
    MissingReceiver { callable: &'static str },
    /// The receiver held a different type than the member's owner.
    ReceiverType {
        expected: &'static str,
        actual: &'static str,
    },
    /// A creation call produced no instance.
    NoReturnValue { callable: &'static str },
    /// The member has no setter.
    NoSetter { member: &'static str },
    /// The invocation target reported a failure of its own.
    Failed { message: Cow<'static, str> },
}

impl InvokeError {
    /// A [`MissingReceiver`](Self::MissingReceiver) for the given callable.
    #[inline]
    pub const fn missing_receiver(callable: &'static str) -> Self {
        Self::MissingReceiver { callable }
    }

    /// A [`ReceiverType`](Self::ReceiverType) expecting `R`.
    #[inline]
    pub fn receiver_type<R: Any>(actual: &'static str) -> Self {
        Self::ReceiverType {
            expected: type_name::<R>(),
            actual,
        }
    }

    /// A [`ValueType`](Self::ValueType) expecting `V`.
    #[inline]
    pub fn value_type<V: Any>(actual: &'static str) -> Self {
        Self::ValueType {
            expected: type_name::<V>(),
            actual,
        }
    }

    /// A [`Failed`](Self::Failed) carrying the target's own message.
    #[inline]
    pub fn failed(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

impl fmt::Display for InvokeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument { index } => {
                write!(f, "missing argument at index {index}")
            }
            Self::ExtraArguments { expected, actual } => {
                write!(
                    f,
                    "argument count mismatch: expected {expected}, received {actual}"
                )
            }
            Self::ArgumentType {
                index,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "argument {index} type mismatch: expected `{expected}`, received `{actual}`"
                )
            }
            Self::ValueType { expected, actual } => {
                write!(
                    f,
                    "value type mismatch: expected `{expected}`, received `{actual}`"
                )
            }
            Self::MissingReceiver { callable } => {
                write!(f, "calling `{callable}` requires a receiver")
            }
            Self::ReceiverType { expected, actual } => {
                write!(
                    f,
                    "receiver type mismatch: expected `{expected}`, received `{actual}`"
                )
            }
            Self::NoReturnValue { callable } => {
                write!(f, "`{callable}` produced no value")
            }
            Self::NoSetter { member } => {
                write!(f, "member `{member}` does not support writing")
            }
            Self::Failed { message } => {
                write!(f, "invocation failed: {message}")
            }
        }
    }
}

impl core::error::Error for InvokeError {}
