use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::{Any, TypeId, type_name};

use crate::Reflect;
use crate::descriptor::{CallableDescriptor, MemberDescriptor};

// -----------------------------------------------------------------------------
// TypeDescriptor

/// Everything the access factory can be asked about one type: its callables,
/// its members, and whether it is intrinsically default-constructible.
///
/// A type registered with a *default hook* (see [`with_default`]) produces
/// its default value directly, bypassing constructor lookup entirely; this is
/// how plain value-like types stay constructible without declaring any
/// constructor. All other types rely on a registered zero-parameter
/// constructor, which default construction looks up eagerly.
///
/// # Examples
///
/// ```
/// use reflect_access::descriptor::TypeDescriptor;
///
/// let descriptor = TypeDescriptor::of::<u64>().with_default::<u64>();
///
/// assert_eq!(descriptor.type_path(), "u64");
/// assert!(descriptor.has_default_hook());
/// ```
///
/// [`with_default`]: TypeDescriptor::with_default
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    ty_id: TypeId,
    type_path: &'static str,
    type_name: &'static str,
    default: Option<fn() -> Box<dyn Reflect>>,
    constructors: Vec<CallableDescriptor>,
    methods: Vec<CallableDescriptor>,
    members: Vec<MemberDescriptor>,
}

impl TypeDescriptor {
    /// Creates an empty descriptor for type `T`.
    pub fn of<T: Any>() -> Self {
        let type_path = type_name::<T>();
        Self {
            ty_id: TypeId::of::<T>(),
            type_path,
            type_name: short_name(type_path),
            default: None,
            constructors: Vec::new(),
            methods: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Installs `T`'s [`Default`] as the intrinsic default hook, builder style.
    ///
    /// `T` must be the described type itself.
    pub fn with_default<T: Default + Reflect>(mut self) -> Self {
        debug_assert!(self.type_is::<T>());
        self.default = Some(|| Box::new(T::default()));
        self
    }

    /// Adds a constructor (or constructor-like static method), builder style.
    #[inline]
    pub fn with_constructor(mut self, constructor: CallableDescriptor) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Adds a method, builder style.
    #[inline]
    pub fn with_method(mut self, method: CallableDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    /// Adds a field or property, builder style.
    #[inline]
    pub fn with_member(mut self, member: MemberDescriptor) -> Self {
        self.members.push(member);
        self
    }

    /// Returns the `TypeId` of the described type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Returns the full path of the described type.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the short name (the last path segment) of the described type.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check if the given type matches the described one.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the intrinsic default hook, if one was installed.
    #[inline]
    pub const fn default_hook(&self) -> Option<fn() -> Box<dyn Reflect>> {
        self.default
    }

    /// Returns `true` if the type carries an intrinsic default hook.
    #[inline]
    pub const fn has_default_hook(&self) -> bool {
        self.default.is_some()
    }

    /// Returns the first registered constructor with the given arity.
    pub fn constructor(&self, arity: usize) -> Option<&CallableDescriptor> {
        self.constructors
            .iter()
            .find(|callable| callable.arity() == arity)
    }

    /// Returns the zero-parameter constructor, public or non-public.
    ///
    /// Only true constructors qualify; zero-argument factory methods do not
    /// stand in for a missing parameterless constructor.
    pub fn default_constructor(&self) -> Option<&CallableDescriptor> {
        self.constructors
            .iter()
            .find(|callable| callable.is_constructor() && callable.arity() == 0)
    }

    /// Returns the first registered method with the given name.
    pub fn method(&self, name: &str) -> Option<&CallableDescriptor> {
        self.methods.iter().find(|callable| callable.name() == name)
    }

    /// Returns the member with the given name.
    pub fn member(&self, name: &str) -> Option<&MemberDescriptor> {
        self.members.iter().find(|member| member.name() == name)
    }

    /// An iterator over all registered constructors.
    #[inline]
    pub fn constructors(&self) -> impl ExactSizeIterator<Item = &CallableDescriptor> {
        self.constructors.iter()
    }

    /// An iterator over all registered methods.
    #[inline]
    pub fn methods(&self) -> impl ExactSizeIterator<Item = &CallableDescriptor> {
        self.methods.iter()
    }

    /// An iterator over all registered members.
    #[inline]
    pub fn members(&self) -> impl ExactSizeIterator<Item = &MemberDescriptor> {
        self.members.iter()
    }
}

// Strips module segments and generic arguments, so
// `alloc::vec::Vec<alloc::string::String>` shortens to `Vec`.
fn short_name(type_path: &'static str) -> &'static str {
    let end = type_path.find('<').unwrap_or(type_path.len());
    let base = &type_path[..end];
    match base.rfind("::") {
        Some(index) => &base[index + 2..],
        None => base,
    }
}

// -----------------------------------------------------------------------------
// GetTypeDescriptor

/// A trait through which a type publishes its own [`TypeDescriptor`]
/// for registration into the
/// [`DescriptorRegistry`](crate::registry::DescriptorRegistry).
///
/// # Examples
///
/// ```
/// use reflect_access::descriptor::{GetTypeDescriptor, TypeDescriptor};
/// use reflect_access::field_member;
///
/// #[derive(Default)]
/// struct Sensor {
///     offset: f32,
/// }
///
/// impl GetTypeDescriptor for Sensor {
///     fn type_descriptor() -> TypeDescriptor {
///         TypeDescriptor::of::<Sensor>()
///             .with_default::<Sensor>()
///             .with_member(field_member!(Sensor, offset: f32))
///     }
/// }
///
/// let descriptor = Sensor::type_descriptor();
/// assert!(descriptor.member("offset").is_some());
/// ```
pub trait GetTypeDescriptor: Any {
    /// Returns the descriptor for this type.
    fn type_descriptor() -> TypeDescriptor;
}

// Primitive types are default-constructible and carry no members of their
// own; their descriptors hold nothing but the intrinsic default hook.
macro_rules! impl_primitive_descriptor {
    ($($ty:ty),* $(,)?) => {
        $(impl GetTypeDescriptor for $ty {
            fn type_descriptor() -> TypeDescriptor {
                TypeDescriptor::of::<$ty>().with_default::<$ty>()
            }
        })*
    };
}

impl_primitive_descriptor!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    String,
);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{GetTypeDescriptor, TypeDescriptor, short_name};
    use crate::descriptor::{CallableDescriptor, ParamDescriptor, Visibility};
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn short_name_strips_modules_and_generics() {
        assert_eq!(short_name("u32"), "u32");
        assert_eq!(short_name("alloc::string::String"), "String");
        assert_eq!(short_name("alloc::vec::Vec<alloc::string::String>"), "Vec");
    }

    #[test]
    fn primitive_descriptors_have_default_hooks() {
        let descriptor = String::type_descriptor();
        assert!(descriptor.has_default_hook());
        assert!(descriptor.type_is::<String>());
        assert_eq!(descriptor.type_name(), "String");

        let value = (descriptor.default_hook().unwrap())();
        assert_eq!(value.take::<String>().unwrap(), "");
    }

    #[test]
    fn default_constructor_lookup_skips_factory_methods() {
        struct Opaque;

        let descriptor = TypeDescriptor::of::<Opaque>()
            .with_constructor(CallableDescriptor::static_method("create", vec![], |_, args| {
                args.finish()?;
                Ok(Some(alloc::boxed::Box::new(5_i32)))
            }))
            .with_constructor(
                CallableDescriptor::constructor("new", vec![], |_, args| {
                    args.finish()?;
                    Ok(Some(alloc::boxed::Box::new(7_i32)))
                })
                .with_visibility(Visibility::NonPublic),
            );

        let found = descriptor.default_constructor().unwrap();
        assert_eq!(found.name(), "new");
        assert_eq!(found.visibility(), Visibility::NonPublic);
    }

    #[test]
    fn constructor_lookup_matches_arity() {
        struct Pair;

        let descriptor = TypeDescriptor::of::<Pair>().with_constructor(
            CallableDescriptor::constructor(
                "new",
                vec![
                    ParamDescriptor::new::<i32>("a"),
                    ParamDescriptor::new::<i32>("b"),
                ],
                |_, args| {
                    args.finish()?;
                    Ok(None)
                },
            ),
        );

        assert!(descriptor.constructor(2).is_some());
        assert!(descriptor.constructor(0).is_none());
        assert!(descriptor.default_constructor().is_none());
    }
}
