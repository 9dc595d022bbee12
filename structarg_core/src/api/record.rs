use crate::api::field::Value;
use crate::api::shape::Shape;

/// Behaviour of a destination record: a struct whose fields receive the parsed Cli values.
///
/// Typically derived via `#[derive(Record)]`, although it may be implemented by hand.
/// The shape and the field access must agree: every field named in the shape (except ignored and embedded ones) must be reachable through [`Record::field_mut`].
///
/// ### Example
/// ```
/// # use structarg_core as structarg;
/// use structarg::{FieldShape, Record, Reflect, Shape, Value};
///
/// #[derive(Default)]
/// struct Arguments {
///     verbose: bool,
/// }
///
/// impl Record for Arguments {
///     fn describe() -> Shape {
///         Shape::new(
///             "Arguments",
///             vec![FieldShape::new("verbose", bool::type_info()).tag("-v")],
///         )
///     }
///
///     fn shape(&self) -> Shape {
///         Self::describe()
///     }
///
///     fn field_mut(&mut self, name: &str) -> Option<&mut dyn Value> {
///         match name {
///             "verbose" => Some(&mut self.verbose),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// The shape of this record type.
    fn describe() -> Shape
    where
        Self: Sized;

    /// The shape of this record (ie: [`Record::describe`] for object safe use).
    fn shape(&self) -> Shape;

    /// Access the field `name`, including fields promoted from embedded records.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Value>;

    /// The program version, reported when `--version` is requested.
    fn version(&self) -> Option<String> {
        None
    }

    /// The program description, shown at the top of the help message.
    fn description(&self) -> Option<String> {
        None
    }
}

/// Wire a type implementing [`UnmarshalArg`](crate::prelude::UnmarshalArg) as a destination value.
///
/// The type's own coercion is used in place of the built-in one, so the type is never treated as a boolean flag.
///
/// ### Example
/// ```
/// # use structarg_core as structarg;
/// use structarg::prelude::UnmarshalArg;
/// use structarg::Value;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Level(u8);
///
/// impl UnmarshalArg for Level {
///     fn unmarshal_arg(&mut self, text: &str) -> Result<(), String> {
///         self.0 = match text {
///             "low" => 1,
///             "high" => 9,
///             _ => return Err("expected low or high".to_string()),
///         };
///         Ok(())
///     }
/// }
///
/// structarg::unmarshal_value!(Level);
///
/// let mut level = Level::default();
/// level.set("high").unwrap();
/// assert_eq!(level, Level(9));
/// ```
#[macro_export]
macro_rules! unmarshal_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Value for $ty {
                fn set(&mut self, text: &str) -> ::std::result::Result<(), $crate::CoerceError> {
                    $crate::prelude::UnmarshalArg::unmarshal_arg(self, text).map_err(|message| {
                        $crate::CoerceError::Custom {
                            token: text.to_string(),
                            type_name: ::std::any::type_name::<$ty>(),
                            message,
                        }
                    })
                }
            }

            impl $crate::Reflect for $ty {
                fn type_info() -> $crate::TypeInfo {
                    $crate::TypeInfo::new(::std::any::type_name::<$ty>(), $crate::TypeKind::Custom)
                }
            }
        )+
    };
}

/// Wire a type implementing [`std::str::FromStr`] as a destination value.
///
/// Like [`unmarshal_value!`](crate::unmarshal_value), the type supplies its own coercion.
#[macro_export]
macro_rules! from_str_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Value for $ty {
                fn set(&mut self, text: &str) -> ::std::result::Result<(), $crate::CoerceError> {
                    *self = <$ty as ::std::str::FromStr>::from_str(text).map_err(|error| {
                        $crate::CoerceError::Custom {
                            token: text.to_string(),
                            type_name: ::std::any::type_name::<$ty>(),
                            message: error.to_string(),
                        }
                    })?;
                    Ok(())
                }
            }

            impl $crate::Reflect for $ty {
                fn type_info() -> $crate::TypeInfo {
                    $crate::TypeInfo::new(::std::any::type_name::<$ty>(), $crate::TypeKind::Custom)
                }
            }
        )+
    };
}
