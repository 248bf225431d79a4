use crate::{FromValue, HashMap, Record, Value};
use alloc::rc::Rc;
use core::fmt;

/// Create [`Props`] from `key: value` pairs.
///
/// ```
/// use memogate::{props, Value};
///
/// let props = props! { text: "Count", counter: 1 };
/// assert_eq!(props.get("counter"), Some(&Value::Int(1)));
/// ```
#[macro_export]
macro_rules! props {
    () => {
        $crate::Props::new()
    };
    ($($key:ident : $value:expr),+ $(,)?) => {
        $crate::Props::new()$(.with(stringify!($key), $value))+
    };
}

/// Error accessing a typed value from [`Props`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PropError {
    /// No value was set for this key.
    #[error("missing prop `{0}`")]
    Missing(Rc<str>),

    /// The value for this key has another kind.
    #[error("prop `{key}` is {found}, expected {expected}")]
    Mismatch {
        /// Key of the prop.
        key: Rc<str>,
        /// Kind that was requested.
        expected: &'static str,
        /// Kind that was found.
        found: &'static str,
    },
}

/// Dynamically keyed record.
///
/// Keys are unordered, so two `Props` with the same entries inserted in a different
/// order are shallowly equal.
#[derive(Clone, Default)]
pub struct Props {
    values: HashMap<Rc<str>, Value>,
}

impl Props {
    /// Create empty props.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, returning the updated props.
    pub fn with(mut self, key: impl Into<Rc<str>>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key` to `value`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<Rc<str>>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// Get the value of `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Get the value of `key` as `T`.
    ///
    /// ```
    /// use memogate::{props, PropError};
    ///
    /// let props = props! { counter: 2 };
    /// assert_eq!(props.get_as::<i64>("counter"), Ok(2));
    /// assert!(matches!(props.get_as::<bool>("counter"), Err(PropError::Mismatch { .. })));
    /// ```
    pub fn get_as<T: FromValue>(&self, key: &str) -> Result<T, PropError> {
        let value = self
            .get(key)
            .ok_or_else(|| PropError::Missing(key.into()))?;

        T::from_value(value).ok_or_else(|| PropError::Mismatch {
            key: key.into(),
            expected: T::KIND,
            found: value.kind(),
        })
    }

    /// Returns `true` if a value is set for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterate over the keys of these props in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|key| &**key)
    }

    /// Iterate over the entries of these props in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(key, value)| (&**key, value))
    }
}

impl Record for Props {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn shallow_eq(&self, other: &Self) -> bool {
        self.values.shallow_eq(&other.values)
    }
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        self.shallow_eq(other)
    }
}

impl fmt::Debug for Props {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<Rc<str>>, V: Into<Value>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        props.extend(iter);
        props
    }
}

impl<K: Into<Rc<str>>, V: Into<Value>> Extend<(K, V)> for Props {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shallow_equal;

    #[test]
    fn it_builds_props() {
        let props = props! { text: "hi", counter: 3, };
        assert_eq!(props.len(), 2);
        assert!(props.contains_key("text"));
        assert_eq!(props.get("text").and_then(Value::as_str), Some("hi"));
        assert!(props!().is_empty());
    }

    #[test]
    fn it_reports_prop_errors() {
        let props = props! { counter: 3 };

        assert_eq!(
            props.get_as::<i64>("missing"),
            Err(PropError::Missing("missing".into()))
        );
        assert_eq!(
            props.get_as::<bool>("counter"),
            Err(PropError::Mismatch {
                key: "counter".into(),
                expected: "bool",
                found: "int"
            })
        );
        assert_eq!(
            PropError::Missing("a".into()).to_string(),
            "missing prop `a`"
        );
    }

    #[test]
    fn it_ignores_insertion_order() {
        let a: Props = [("a", 1), ("b", 2)].into_iter().collect();
        let b: Props = [("b", 2), ("a", 1)].into_iter().collect();
        assert!(shallow_equal(&a, &b));
        assert_eq!(a, b);
    }

    #[test]
    fn it_compares_after_removal() {
        let mut a = props! { a: 1, b: 2 };
        assert_eq!(a.remove("b"), Some(Value::Int(2)));
        assert!(shallow_equal(&a, &props! { a: 1 }));
    }
}
