use core::fmt;

// -----------------------------------------------------------------------------
// DescriptorKind

/// Which descriptor a factory operation was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorKind {
    Callable,
    Member,
    Type,
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Callable => "callable",
            Self::Member => "member",
            Self::Type => "type",
        };
        f.write_str(name)
    }
}

// -----------------------------------------------------------------------------
// AccessorCreateError

/// An enumeration of all error outcomes that might happen while a bound
/// accessor is being *created*.
///
/// These fail fast: no accessor is returned, and nothing is deferred into a
/// closure that would fail later. Failures of the underlying call itself are
/// [`InvokeError`](crate::descriptor::InvokeError), reported when an accessor
/// is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessorCreateError {
    /// The required descriptor was absent, typically because a registry
    /// lookup came back empty.
    MissingDescriptor { expected: DescriptorKind },
    /// Default construction was requested for a type with neither an
    /// intrinsic default hook nor a zero-parameter constructor.
    NoDefaultConstructor { type_path: &'static str },
}

impl fmt::Display for AccessorCreateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDescriptor { expected } => {
                write!(f, "no {expected} descriptor was supplied")
            }
            Self::NoDefaultConstructor { type_path } => {
                write!(f, "unable to find default constructor for `{type_path}`")
            }
        }
    }
}

impl core::error::Error for AccessorCreateError {}
