//! Records and shallow equality.
//!
//! A [`Record`] is a flat set of keyed values, such as the props of a view.
//! Two records are shallowly equal when they have the same number of keys and every
//! key holds a [`ShallowEq`] value in both.
//!
//! Scalars (numbers, `bool`, `char`, strings) compare by value.
//! Shared composites ([`Rc`], [`Arc`]) compare by identity:
//! two structurally identical values behind distinct pointers are *not* equal.
//!
//! ```
//! use memogate::{props, shallow_equal, Value};
//!
//! assert!(shallow_equal(&props! { a: 1, b: 2 }, &props! { b: 2, a: 1 }));
//! assert!(!shallow_equal(&props! { a: 1 }, &props! { a: 1, b: 2 }));
//!
//! let x = Value::new_shared([1]);
//! assert!(shallow_equal(&props! { x: x.clone() }, &props! { x: x }));
//! assert!(!shallow_equal(
//!     &props! { x: Value::new_shared([1]) },
//!     &props! { x: Value::new_shared([1]) },
//! ));
//! ```

use alloc::{collections::BTreeMap, rc::Rc, string::String, sync::Arc};
use core::hash::{BuildHasher, Hash};

pub use memogate_macros::Record;

/// Shallow comparison of a single value.
///
/// Scalars compare by value, shared pointers by identity.
pub trait ShallowEq {
    /// Returns `true` if `self` and `other` are shallowly equal.
    fn shallow_eq(&self, other: &Self) -> bool;
}

macro_rules! impl_shallow_eq_by_value {
    ($($t:ty),*) => {
        $(
            impl ShallowEq for $t {
                fn shallow_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    }
}

impl_shallow_eq_by_value!(
    (),
    bool,
    char,
    f32,
    f64,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    str,
    String
);

impl<T: ShallowEq + ?Sized> ShallowEq for &T {
    fn shallow_eq(&self, other: &Self) -> bool {
        (**self).shallow_eq(*other)
    }
}

impl<T: ShallowEq> ShallowEq for Option<T> {
    fn shallow_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.shallow_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: ?Sized> ShallowEq for Rc<T> {
    fn shallow_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> ShallowEq for Arc<T> {
    fn shallow_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

/// Keyed input to a memoized computation.
///
/// In most cases, this trait should be derived with `#[derive(Record)]`,
/// which compares every field with [`ShallowEq`].
/// Dynamically keyed records can use [`Props`](crate::Props) or a map.
///
/// Records are ordered-irrelevant: only the set of keys and their values matter.
pub trait Record {
    /// Number of keys in this record.
    fn len(&self) -> usize;

    /// Returns `true` if this record has no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `self` and `other` have the same keys holding shallowly-equal values.
    fn shallow_eq(&self, other: &Self) -> bool;
}

impl Record for () {
    fn len(&self) -> usize {
        0
    }

    fn shallow_eq(&self, other: &Self) -> bool {
        let _ = other;
        true
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn shallow_eq(&self, other: &Self) -> bool {
        (**self).shallow_eq(*other)
    }
}

/// An absent record is treated as an empty one.
impl<R: Record> Record for Option<R> {
    fn len(&self) -> usize {
        self.as_ref().map_or(0, R::len)
    }

    fn shallow_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.shallow_eq(b),
            (None, None) => true,
            (Some(record), None) | (None, Some(record)) => record.is_empty(),
        }
    }
}

impl<K, V, S> Record for hashbrown::HashMap<K, V, S>
where
    K: Eq + Hash,
    V: ShallowEq,
    S: BuildHasher,
{
    fn len(&self) -> usize {
        hashbrown::HashMap::len(self)
    }

    fn shallow_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|o| value.shallow_eq(o)))
    }
}

#[cfg(feature = "std")]
impl<K, V, S> Record for std::collections::HashMap<K, V, S>
where
    K: Eq + Hash,
    V: ShallowEq,
    S: BuildHasher,
{
    fn len(&self) -> usize {
        std::collections::HashMap::len(self)
    }

    fn shallow_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|o| value.shallow_eq(o)))
    }
}

impl<K: Ord, V: ShallowEq> Record for BTreeMap<K, V> {
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn shallow_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|o| value.shallow_eq(o)))
    }
}

/// Returns `true` if `a` and `b` are shallowly equal.
///
/// See the [module-level documentation](crate::record) for the comparison rules.
pub fn shallow_equal<R: Record + ?Sized>(a: &R, b: &R) -> bool {
    a.shallow_eq(b)
}

/// Returns `true` if work derived from `old` should be redone for `new`.
///
/// This is the negation of [`shallow_equal`], for hosts that ask "should I recompute?".
pub fn should_recompute<R: Record + ?Sized>(old: &R, new: &R) -> bool {
    !shallow_equal(old, new)
}
