use crate::descriptor::{GetTypeDescriptor, TypeDescriptor};

// -----------------------------------------------------------------------------
// TypeDescriptorRegistration

/// A link-time collected handle to one type's
/// [`GetTypeDescriptor`] implementation.
///
/// Created through [`submit_type_descriptor!`](crate::submit_type_descriptor)
/// and drained by
/// [`DescriptorRegistry::auto_register`](crate::registry::DescriptorRegistry::auto_register).
pub struct TypeDescriptorRegistration {
    get: fn() -> TypeDescriptor,
}

impl TypeDescriptorRegistration {
    /// Creates a registration from a descriptor-producing function.
    #[inline]
    pub const fn new(get: fn() -> TypeDescriptor) -> Self {
        Self { get }
    }

    /// Produces the registered type's descriptor.
    #[inline]
    pub fn descriptor(&self) -> TypeDescriptor {
        (self.get)()
    }
}

inventory::collect!(TypeDescriptorRegistration);

/// Declares a type for link-time descriptor collection.
///
/// The type must implement
/// [`GetTypeDescriptor`](crate::descriptor::GetTypeDescriptor).
///
/// ```
/// use reflect_access::descriptor::{GetTypeDescriptor, TypeDescriptor};
/// use reflect_access::registry::DescriptorRegistry;
///
/// #[derive(Default)]
/// struct Frame {
///     sequence: u64,
/// }
///
/// impl GetTypeDescriptor for Frame {
///     fn type_descriptor() -> TypeDescriptor {
///         TypeDescriptor::of::<Frame>().with_default::<Frame>()
///     }
/// }
///
/// reflect_access::submit_type_descriptor!(Frame);
///
/// let mut registry = DescriptorRegistry::empty();
/// assert!(registry.auto_register());
/// assert!(registry.get_with_name("Frame").is_some());
/// ```
#[macro_export]
macro_rules! submit_type_descriptor {
    ($ty:ty) => {
        $crate::__macro_exports::inventory::submit! {
            $crate::registry::TypeDescriptorRegistration::new(
                <$ty as $crate::descriptor::GetTypeDescriptor>::type_descriptor,
            )
        }
    };
}

// -----------------------------------------------------------------------------
// Platform probe

// Submitted by this crate itself: when link-time collection works at all,
// draining the inventory must at least surface this type.
#[doc(hidden)]
pub(crate) struct AutoRegisterProbe;

impl GetTypeDescriptor for AutoRegisterProbe {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<AutoRegisterProbe>()
    }
}

crate::submit_type_descriptor!(AutoRegisterProbe);
