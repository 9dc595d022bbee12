use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::ffi::OsString;
use std::hash::Hash;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;

use crate::api::capture::*;
use crate::api::record::Record;
use crate::api::shape::{ScalarKind, TypeInfo, TypeKind};
use crate::prelude::Collectable;

/// Behaviour to write Cli tokens into a destination field.
///
/// We use this at the bottom of the destination object graph so the interpreter can work across all field types.
/// Each operation defaults to [`CoerceError::Unsupported`]; implementations override the writes that make sense for them.
pub trait Value {
    /// Coerce a single token and store it.
    fn set(&mut self, text: &str) -> Result<(), CoerceError> {
        let _ = text;
        Err(unsupported::<Self>())
    }

    /// Coerce each token and append it, first removing the existing values when `truncate` is set.
    fn set_many(&mut self, values: &[&str], truncate: bool) -> Result<(), CoerceError> {
        let _ = (values, truncate);
        Err(unsupported::<Self>())
    }

    /// Replace the destination with a freshly defaulted record.
    /// Returns `false` when the destination does not hold an optional record.
    fn instantiate(&mut self) -> bool {
        false
    }

    /// Access the destination as a record, when it holds one.
    fn record(&mut self) -> Option<&mut dyn Record> {
        None
    }
}

/// Behaviour to describe a destination type at runtime.
pub trait Reflect: Value {
    /// The runtime description of this type.
    fn type_info() -> TypeInfo;
}

fn unsupported<T: ?Sized>() -> CoerceError {
    CoerceError::Unsupported {
        type_name: std::any::type_name::<T>(),
    }
}

macro_rules! scalar_value {
    ($kind:expr; $($ty:ty),+ $(,)?) => {
        $(
            impl Value for $ty {
                fn set(&mut self, text: &str) -> Result<(), CoerceError> {
                    *self = coerce::<$ty>(text)?;
                    Ok(())
                }
            }

            impl Reflect for $ty {
                fn type_info() -> TypeInfo {
                    TypeInfo::scalar(std::any::type_name::<$ty>(), $kind)
                }
            }
        )+
    };
}

scalar_value!(ScalarKind::Signed; i8, i16, i32, i64, i128, isize);
scalar_value!(ScalarKind::Unsigned; u8, u16, u32, u64, u128, usize);
scalar_value!(ScalarKind::Float; f32, f64);
scalar_value!(ScalarKind::Char; char);
scalar_value!(ScalarKind::Text; String, OsString);
scalar_value!(ScalarKind::Path; PathBuf);
scalar_value!(ScalarKind::Address; IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr);

impl Value for bool {
    fn set(&mut self, text: &str) -> Result<(), CoerceError> {
        *self = coerce_bool(text)?;
        Ok(())
    }
}

impl Reflect for bool {
    fn type_info() -> TypeInfo {
        TypeInfo::scalar("bool", ScalarKind::Bool)
    }
}

impl<T> Value for Option<T>
where
    T: Value + Default,
{
    fn set(&mut self, text: &str) -> Result<(), CoerceError> {
        let mut inner = T::default();
        inner.set(text)?;
        self.replace(inner);
        Ok(())
    }

    fn set_many(&mut self, values: &[&str], truncate: bool) -> Result<(), CoerceError> {
        self.get_or_insert_with(T::default).set_many(values, truncate)
    }

    fn instantiate(&mut self) -> bool {
        *self = Some(T::default());
        true
    }

    fn record(&mut self) -> Option<&mut dyn Record> {
        self.as_mut().and_then(|inner| inner.record())
    }
}

impl<T> Reflect for Option<T>
where
    T: Reflect + Default,
{
    fn type_info() -> TypeInfo {
        TypeInfo::new(
            std::any::type_name::<Self>(),
            TypeKind::Pointer(Box::new(T::type_info())),
        )
    }
}

impl<T> Value for Box<T>
where
    T: Value + ?Sized,
{
    fn set(&mut self, text: &str) -> Result<(), CoerceError> {
        (**self).set(text)
    }

    fn set_many(&mut self, values: &[&str], truncate: bool) -> Result<(), CoerceError> {
        (**self).set_many(values, truncate)
    }

    fn instantiate(&mut self) -> bool {
        (**self).instantiate()
    }

    fn record(&mut self) -> Option<&mut dyn Record> {
        (**self).record()
    }
}

// A box is never empty, so it describes exactly as its contents.
impl<T> Reflect for Box<T>
where
    T: Reflect,
{
    fn type_info() -> TypeInfo {
        T::type_info()
    }
}

fn extend_collection<C, T>(
    collection: &mut C,
    values: &[&str],
    truncate: bool,
) -> Result<(), CoerceError>
where
    C: Collectable<T>,
    T: Value + Default,
{
    if truncate {
        collection.reset();
    }

    for text in values {
        let mut item = T::default();
        item.set(text)?;
        collection.add(item);
    }

    Ok(())
}

macro_rules! sequence_value {
    ($collection:ident $(, $bound:path)*) => {
        impl<T> Value for $collection<T>
        where
            T: Value + Default $(+ $bound)*,
        {
            fn set_many(&mut self, values: &[&str], truncate: bool) -> Result<(), CoerceError> {
                extend_collection(self, values, truncate)
            }
        }

        impl<T> Reflect for $collection<T>
        where
            T: Reflect + Default $(+ $bound)*,
        {
            fn type_info() -> TypeInfo {
                TypeInfo::new(
                    std::any::type_name::<Self>(),
                    TypeKind::Sequence(Box::new(T::type_info())),
                )
            }
        }
    };
}

sequence_value!(Vec);
sequence_value!(VecDeque);
sequence_value!(HashSet, Eq, Hash);
sequence_value!(BTreeSet, Ord);

impl<T> Collectable<T> for Vec<T> {
    fn add(&mut self, item: T) {
        self.push(item);
    }

    fn reset(&mut self) {
        self.clear();
    }
}

impl<T> Collectable<T> for VecDeque<T> {
    fn add(&mut self, item: T) {
        self.push_back(item);
    }

    fn reset(&mut self) {
        self.clear();
    }
}

impl<T: Eq + Hash> Collectable<T> for HashSet<T> {
    fn add(&mut self, item: T) {
        self.insert(item);
    }

    fn reset(&mut self) {
        self.clear();
    }
}

impl<T: Ord> Collectable<T> for BTreeSet<T> {
    fn add(&mut self, item: T) {
        self.insert(item);
    }

    fn reset(&mut self) {
        self.clear();
    }
}

impl<K, V, S> Value for HashMap<K, V, S> {}

impl<K, V, S> Reflect for HashMap<K, V, S> {
    fn type_info() -> TypeInfo {
        TypeInfo::opaque(std::any::type_name::<Self>())
    }
}

impl<K, V> Value for BTreeMap<K, V> {}

impl<K, V> Reflect for BTreeMap<K, V> {
    fn type_info() -> TypeInfo {
        TypeInfo::opaque(std::any::type_name::<Self>())
    }
}
