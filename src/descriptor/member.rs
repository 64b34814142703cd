use alloc::boxed::Box;

use crate::Reflect;
use crate::descriptor::InvokeError;

// -----------------------------------------------------------------------------
// GetFn / SetFn

/// The erased reader stored by a [`MemberDescriptor`].
pub type GetFn = fn(&dyn Reflect) -> Result<Box<dyn Reflect>, InvokeError>;

/// The erased writer stored by a [`MemberDescriptor`].
pub type SetFn = fn(&mut dyn Reflect, Box<dyn Reflect>) -> Result<(), InvokeError>;

// -----------------------------------------------------------------------------
// MemberKind

/// Whether a [`MemberDescriptor`] denotes a plain field or a property
/// backed by accessor methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Field,
    Property,
}

// -----------------------------------------------------------------------------
// MemberDescriptor

/// A field or property of one type, readable and optionally writable through
/// erased accessor functions.
///
/// A member without a writer still yields a setter accessor from the factory;
/// the failure ([`InvokeError::NoSetter`]) is reported when that accessor is
/// *called*, keeping member operations lazy end to end.
///
/// The [`field_member!`](crate::field_member) macro expands to a descriptor
/// whose accessors clone the field on read and move the value on write.
///
/// # Examples
///
/// ```
/// use reflect_access::field_member;
///
/// struct Meter {
///     reading: f64,
/// }
///
/// let member = field_member!(Meter, reading: f64);
///
/// let mut meter = Meter { reading: 0.5 };
/// member.set(&mut meter, Box::new(2.25_f64)).unwrap();
///
/// let value = member.get(&meter).unwrap();
/// assert_eq!(value.take::<f64>().unwrap(), 2.25);
/// ```
#[derive(Debug, Clone)]
pub struct MemberDescriptor {
    name: &'static str,
    kind: MemberKind,
    get: GetFn,
    set: Option<SetFn>,
}

impl MemberDescriptor {
    /// Creates a field descriptor.
    #[inline]
    pub fn field(name: &'static str, get: GetFn, set: Option<SetFn>) -> Self {
        Self {
            name,
            kind: MemberKind::Field,
            get,
            set,
        }
    }

    /// Creates a property descriptor.
    #[inline]
    pub fn property(name: &'static str, get: GetFn, set: Option<SetFn>) -> Self {
        Self {
            name,
            kind: MemberKind::Property,
            get,
            set,
        }
    }

    /// Returns the member name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns whether this member is a field or a property.
    #[inline]
    pub const fn kind(&self) -> MemberKind {
        self.kind
    }

    /// Returns `true` if the member has a writer.
    #[inline]
    pub const fn is_writable(&self) -> bool {
        self.set.is_some()
    }

    /// Reads the member's current value from `receiver`.
    #[inline]
    pub fn get(&self, receiver: &dyn Reflect) -> Result<Box<dyn Reflect>, InvokeError> {
        (self.get)(receiver)
    }

    /// Writes `value` into the member on `receiver`.
    ///
    /// Fails with [`InvokeError::NoSetter`] for read-only members.
    pub fn set(
        &self,
        receiver: &mut dyn Reflect,
        value: Box<dyn Reflect>,
    ) -> Result<(), InvokeError> {
        match self.set {
            Some(set) => set(receiver, value),
            None => Err(InvokeError::NoSetter { member: self.name }),
        }
    }
}

// -----------------------------------------------------------------------------
// field_member!

/// Expands to a [`MemberDescriptor`] for one named field.
///
/// The generated getter clones the field; the generated setter moves the
/// value in. The field type must be `Clone`.
///
/// ```
/// use reflect_access::field_member;
///
/// #[derive(Default)]
/// struct Config {
///     retries: u32,
/// }
///
/// let member = field_member!(Config, retries: u32);
/// let mut config = Config::default();
///
/// member.set(&mut config, Box::new(3_u32)).unwrap();
/// assert_eq!(config.retries, 3);
/// ```
#[macro_export]
macro_rules! field_member {
    ($owner:ty, $field:ident: $field_ty:ty) => {
        $crate::descriptor::MemberDescriptor::field(
            ::core::stringify!($field),
            |receiver| {
                let owner = receiver.downcast_ref::<$owner>().ok_or_else(|| {
                    $crate::descriptor::InvokeError::receiver_type::<$owner>(receiver.type_path())
                })?;
                ::core::result::Result::Ok($crate::__macro_exports::alloc::boxed::Box::new(
                    ::core::clone::Clone::clone(&owner.$field),
                ))
            },
            ::core::option::Option::Some(|receiver, value| {
                let actual = (*receiver).type_path();
                let value = value.take::<$field_ty>().map_err(|value| {
                    $crate::descriptor::InvokeError::value_type::<$field_ty>((*value).type_path())
                })?;
                let owner = receiver
                    .downcast_mut::<$owner>()
                    .ok_or_else(|| $crate::descriptor::InvokeError::receiver_type::<$owner>(actual))?;
                owner.$field = value;
                ::core::result::Result::Ok(())
            }),
        )
    };
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{MemberDescriptor, MemberKind};
    use crate::descriptor::InvokeError;
    use alloc::boxed::Box;
    use alloc::string::String;

    struct Session {
        user: String,
    }

    #[test]
    fn field_macro_round_trips_values() {
        let member = field_member!(Session, user: String);
        assert_eq!(member.name(), "user");
        assert_eq!(member.kind(), MemberKind::Field);
        assert!(member.is_writable());

        let mut session = Session {
            user: String::from("anonymous"),
        };
        member
            .set(&mut session, Box::new(String::from("root")))
            .unwrap();
        assert_eq!(session.user, "root");

        let value = member.get(&session).unwrap();
        assert_eq!(value.take::<String>().unwrap(), "root");
    }

    #[test]
    fn wrong_receiver_type_is_reported() {
        let member = field_member!(Session, user: String);

        let err = member.get(&5_u32).unwrap_err();
        assert!(matches!(err, InvokeError::ReceiverType { actual: "u32", .. }));
    }

    #[test]
    fn wrong_value_type_is_reported() {
        let member = field_member!(Session, user: String);
        let mut session = Session {
            user: String::new(),
        };

        let err = member.set(&mut session, Box::new(1_i32)).unwrap_err();
        assert!(matches!(err, InvokeError::ValueType { actual: "i32", .. }));
    }

    #[test]
    fn read_only_member_fails_on_write() {
        let member = MemberDescriptor::property(
            "len",
            |receiver| {
                let owner = receiver
                    .downcast_ref::<Session>()
                    .ok_or_else(|| InvokeError::receiver_type::<Session>(receiver.type_path()))?;
                Ok(Box::new(owner.user.len()))
            },
            None,
        );
        assert!(!member.is_writable());

        let mut session = Session {
            user: String::from("ab"),
        };
        let len = member.get(&session).unwrap().take::<usize>().unwrap();
        assert_eq!(len, 2);

        let err = member.set(&mut session, Box::new(0_usize)).unwrap_err();
        assert_eq!(err, InvokeError::NoSetter { member: "len" });
    }
}
