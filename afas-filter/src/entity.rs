/// A field key of an [`Entity`], resolved to its AFAS field id on the wire.
pub trait Field: Copy {
    fn name(&self) -> &'static str;

    /// Reverse lookup used when filters come from configuration instead of code.
    fn from_name(name: &str) -> Option<Self>;
}

/// A logical AFAS resource (a GetConnector row type).
///
/// The associated [`Field`] type limits filter and order-by keys to the
/// fields the entity declares. Field value types are not tracked per key.
pub trait Entity {
    type Field: Field;
}

/// Declare the field enum of an entity and wire it up as its [`Entity::Field`].
///
/// ```
/// use afas_filter::{afas_fields, Field};
///
/// pub struct Employee;
///
/// afas_fields! {
///     pub enum EmployeeField for Employee {
///         Id => "EmployeeId",
///         Name => "Name",
///     }
/// }
///
/// assert_eq!(EmployeeField::Id.name(), "EmployeeId");
/// assert_eq!(EmployeeField::from_name("Name"), Some(EmployeeField::Name));
/// ```
///
/// Wire names must not be empty:
///
/// ```compile_fail
/// use afas_filter::afas_fields;
///
/// pub struct Employee;
///
/// afas_fields! {
///     pub enum EmployeeField for Employee {
///         Id => "",
///     }
/// }
/// ```
#[macro_export]
macro_rules! afas_fields {
    (
        $(#[$meta:meta])*
        $vis:vis enum $field:ident for $entity:ty {
            $( $variant:ident => $name:literal ),+ $(,)?
        }
    ) => {
        const _: () = {
            $( ::std::assert!(!$name.is_empty(), "AFAS field names must not be empty"); )+
        };

        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $field {
            $( $variant ),+
        }

        impl $crate::Field for $field {
            fn name(&self) -> &'static str {
                match self {
                    $( $field::$variant => $name ),+
                }
            }

            fn from_name(name: &str) -> ::std::option::Option<Self> {
                match name {
                    $( $name => ::std::option::Option::Some($field::$variant), )+
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl $crate::Entity for $entity {
            type Field = $field;
        }
    };
}
