use core::any::TypeId;

use crate::descriptor::{GetTypeDescriptor, TypeDescriptor};
use crate::hash::{FixedHashState, HashMap, HashSet, TypeIdMap};

// -----------------------------------------------------------------------------
// DescriptorRegistry

/// The central store of [`TypeDescriptor`]s.
///
/// The contract resolver registers every participating type here and later
/// looks descriptors up by [`TypeId`], full type path, or short type name;
/// the lookup result is handed directly to an
/// [`AccessorFactory`](crate::factory::AccessorFactory) operation.
///
/// Short type names stop resolving once two registered types share one; the
/// full path keeps working.
///
/// # Examples
///
/// ```
/// use reflect_access::registry::DescriptorRegistry;
///
/// let registry = DescriptorRegistry::new(); // `new` registers primitive types
///
/// let descriptor = registry.get_with_name("String").unwrap();
/// assert!(descriptor.has_default_hook());
///
/// let value = (descriptor.default_hook().unwrap())();
/// assert_eq!(value.take::<String>().unwrap(), "");
/// ```
pub struct DescriptorRegistry {
    descriptor_table: TypeIdMap<TypeDescriptor>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl Default for DescriptorRegistry {
    /// See [`DescriptorRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorRegistry {
    /// Creates an empty registry.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            descriptor_table: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(FixedHashState),
            type_name_to_id: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
        }
    }

    /// Creates a registry with the primitive types pre-registered.
    ///
    /// - `()` `bool` `char`
    /// - `i8 - i128` `isize`
    /// - `u8 - u128` `usize`
    /// - `f32` `f64`
    /// - `String`
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<()>();
        registry.register::<bool>();
        registry.register::<char>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<u128>();
        registry.register::<usize>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<i128>();
        registry.register::<isize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<alloc::string::String>();
        registry
    }

    // # Validity
    // The type must **not** already exist.
    fn add_new_type_indices(
        descriptor: &TypeDescriptor,
        type_path_to_id: &mut HashMap<&'static str, TypeId>,
        type_name_to_id: &mut HashMap<&'static str, TypeId>,
        ambiguous_names: &mut HashSet<&'static str>,
    ) {
        let type_name = descriptor.type_name();

        if !ambiguous_names.contains(type_name) {
            if type_name_to_id.contains_key(type_name) {
                type_name_to_id.remove(type_name);
                ambiguous_names.insert(type_name);
                log::warn!(
                    "type name `{type_name}` is ambiguous, lookup by name is disabled for it"
                );
            } else {
                type_name_to_id.insert(type_name, descriptor.ty_id());
            }
        }

        // For new type, assuming that the full path cannot be duplicated.
        type_path_to_id.insert(descriptor.type_path(), descriptor.ty_id());
    }

    // - If the key `TypeId` already exists, does nothing and returns `false`.
    // - If the key `TypeId` does not exist, inserts and returns `true`.
    fn register_internal(
        &mut self,
        type_id: TypeId,
        get_descriptor: impl FnOnce() -> TypeDescriptor,
    ) -> bool {
        let Self {
            descriptor_table,
            type_path_to_id,
            type_name_to_id,
            ambiguous_names,
        } = self;

        descriptor_table.try_insert(type_id, || {
            let descriptor = get_descriptor();
            Self::add_new_type_indices(
                &descriptor,
                type_path_to_id,
                type_name_to_id,
                ambiguous_names,
            );
            descriptor
        })
    }

    /// Registers type `T` through its [`GetTypeDescriptor`] implementation.
    ///
    /// Does nothing and returns `false` if `T` is already registered.
    #[inline]
    pub fn register<T: GetTypeDescriptor>(&mut self) -> bool {
        self.register_internal(TypeId::of::<T>(), T::type_descriptor)
    }

    /// Inserts an already built descriptor.
    ///
    /// Does nothing and returns `false` if the type is already registered.
    pub fn insert(&mut self, descriptor: TypeDescriptor) -> bool {
        let type_id = descriptor.ty_id();
        self.register_internal(type_id, || descriptor)
    }

    /// Returns `true` if the given type is registered.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.descriptor_table.contains(&type_id)
    }

    /// Returns the descriptor registered for the given `TypeId`.
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeDescriptor> {
        self.descriptor_table.get(&type_id)
    }

    /// Returns a mutable reference to the descriptor registered for the
    /// given `TypeId`, allowing callables and members to be added after
    /// registration.
    #[inline]
    pub fn get_mut(&mut self, type_id: TypeId) -> Option<&mut TypeDescriptor> {
        self.descriptor_table.get_mut(&type_id)
    }

    /// Returns the descriptor registered under the given full type path.
    pub fn get_with_path(&self, type_path: &str) -> Option<&TypeDescriptor> {
        let type_id = self.type_path_to_id.get(type_path)?;
        self.descriptor_table.get(type_id)
    }

    /// Returns the descriptor registered under the given short type name.
    ///
    /// Returns `None` for names shared by several registered types.
    pub fn get_with_name(&self, type_name: &str) -> Option<&TypeDescriptor> {
        let type_id = self.type_name_to_id.get(type_name)?;
        self.descriptor_table.get(type_id)
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.descriptor_table.len()
    }

    /// Returns `true` if no type is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.descriptor_table.is_empty()
    }

    /// An iterator visiting all registered descriptors in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeDescriptor> {
        self.descriptor_table.values()
    }

    /// Registers every type declared with
    /// [`submit_type_descriptor!`](crate::submit_type_descriptor).
    ///
    /// Equivalent to calling [`insert`](Self::insert) for each collected
    /// descriptor; repeated calls are cheap and insert no duplicates.
    ///
    /// Returns `true` if link-time collection works on the current platform.
    /// Without the `auto_register` feature this always does nothing and
    /// returns `false`.
    #[cfg(feature = "auto_register")]
    pub fn auto_register(&mut self) -> bool {
        use super::auto_register::{AutoRegisterProbe, TypeDescriptorRegistration};

        // Reduce the cost of duplicate registrations.
        if self.contains(TypeId::of::<AutoRegisterProbe>()) {
            return true;
        }

        for registration in inventory::iter::<TypeDescriptorRegistration> {
            self.insert(registration.descriptor());
        }

        self.contains(TypeId::of::<AutoRegisterProbe>())
    }

    /// Registers every type declared with
    /// [`submit_type_descriptor!`](crate::submit_type_descriptor).
    #[cfg(not(feature = "auto_register"))]
    #[inline(always)]
    pub fn auto_register(&mut self) -> bool {
        false
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::DescriptorRegistry;
    use crate::descriptor::{GetTypeDescriptor, TypeDescriptor};
    use crate::field_member;
    use core::any::TypeId;

    #[derive(Default, PartialEq, Debug)]
    struct Probe {
        level: u8,
    }

    impl GetTypeDescriptor for Probe {
        fn type_descriptor() -> TypeDescriptor {
            TypeDescriptor::of::<Probe>()
                .with_default::<Probe>()
                .with_member(field_member!(Probe, level: u8))
        }
    }

    #[test]
    fn new_registers_primitives() {
        let registry = DescriptorRegistry::new();

        assert!(registry.contains(TypeId::of::<bool>()));
        assert!(registry.contains(TypeId::of::<i32>()));
        assert!(registry.get_with_path("f64").is_some());
        assert!(registry.get_with_name("String").is_some());
        assert!(!registry.is_empty());
    }

    #[test]
    fn register_indexes_path_and_name() {
        let mut registry = DescriptorRegistry::empty();
        assert!(registry.register::<Probe>());
        // Second registration is a no-op.
        assert!(!registry.register::<Probe>());
        assert_eq!(registry.len(), 1);

        let by_id = registry.get(TypeId::of::<Probe>()).unwrap();
        assert!(by_id.member("level").is_some());

        let path = core::any::type_name::<Probe>();
        assert!(registry.get_with_path(path).is_some());
        assert!(registry.get_with_name("Probe").is_some());
    }

    #[test]
    fn ambiguous_names_stop_resolving() {
        mod first {
            pub struct Twin;
        }
        mod second {
            pub struct Twin;
        }

        let mut registry = DescriptorRegistry::empty();
        registry.insert(TypeDescriptor::of::<first::Twin>());
        registry.insert(TypeDescriptor::of::<second::Twin>());

        assert!(registry.get_with_name("Twin").is_none());
        assert!(
            registry
                .get_with_path(core::any::type_name::<first::Twin>())
                .is_some()
        );
        assert!(
            registry
                .get_with_path(core::any::type_name::<second::Twin>())
                .is_some()
        );
    }

    #[test]
    fn get_mut_allows_late_member_registration() {
        let mut registry = DescriptorRegistry::empty();
        registry.insert(TypeDescriptor::of::<Probe>());

        let descriptor = registry.get_mut(TypeId::of::<Probe>()).unwrap();
        assert!(descriptor.member("level").is_none());
        let updated = descriptor.clone().with_member(field_member!(Probe, level: u8));
        *descriptor = updated;

        let descriptor = registry.get(TypeId::of::<Probe>()).unwrap();
        assert!(descriptor.member("level").is_some());
    }

    #[cfg(feature = "auto_register")]
    mod auto_register {
        use super::super::DescriptorRegistry;
        use crate::descriptor::{GetTypeDescriptor, TypeDescriptor};

        #[derive(Default)]
        struct Collected {
            tag: u32,
        }

        impl GetTypeDescriptor for Collected {
            fn type_descriptor() -> TypeDescriptor {
                TypeDescriptor::of::<Collected>().with_default::<Collected>()
            }
        }

        crate::submit_type_descriptor!(Collected);

        #[test]
        fn auto_register_collects_submitted_types() {
            let mut registry = DescriptorRegistry::empty();
            assert!(registry.auto_register());
            assert!(registry.get_with_name("Collected").is_some());

            // Repeated calls stay cheap and truthful.
            assert!(registry.auto_register());
        }
    }
}
