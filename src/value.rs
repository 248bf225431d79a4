use crate::ShallowEq;
use alloc::{rc::Rc, string::String};
use core::{any::Any, fmt};

/// Dynamically typed value of a [`Props`](crate::Props) record.
///
/// Scalars compare by value.
/// [`Value::Shared`] holds a composite and compares by identity,
/// so two structurally identical composites are only equal if they are the same allocation.
///
/// Numbers compare by numeric value across kinds, so `Int(1)`, `UInt(1)` and `Float(1.)`
/// are equal. Values of any other two kinds are never equal.
#[derive(Clone, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Floating point number, compared with IEEE equality (`NaN` is never equal).
    Float(f64),
    /// Character.
    Char(char),
    /// String, compared by content.
    Str(Rc<str>),
    /// Shared composite, compared by identity.
    Shared(Rc<dyn Any>),
}

impl Value {
    /// Create a new [`Value::Shared`] from a composite value.
    pub fn new_shared<T: Any>(value: T) -> Self {
        Value::Shared(Rc::new(value))
    }

    /// Name of this value's kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::Char(_) => "char",
            Value::Str(_) => "str",
            Value::Shared(_) => "shared",
        }
    }

    /// Returns `true` if this value is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the string content of a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the composite of a [`Value::Shared`] as `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Shared(shared) => (**shared).downcast_ref(),
            _ => None,
        }
    }
}

impl ShallowEq for Value {
    fn shallow_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::UInt(a), Value::UInt(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::UInt(b)) | (Value::UInt(b), Value::Int(a)) => {
                i128::from(*a) == i128::from(*b)
            }
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                int_eq_float(i128::from(*a), *b)
            }
            (Value::UInt(a), Value::Float(b)) | (Value::Float(b), Value::UInt(a)) => {
                int_eq_float(i128::from(*a), *b)
            }
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Shared(a), Value::Shared(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Returns `true` if `float` is integral and equal to `int`.
fn int_eq_float(int: i128, float: f64) -> bool {
    // Casts saturate and map `NaN` to zero, so only exact integers survive the round trip.
    let truncated = float as i128;
    truncated as f64 == float && truncated == int
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.shallow_eq(other)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Value::Int(value) => f.debug_tuple("Int").field(value).finish(),
            Value::UInt(value) => f.debug_tuple("UInt").field(value).finish(),
            Value::Float(value) => f.debug_tuple("Float").field(value).finish(),
            Value::Char(value) => f.debug_tuple("Char").field(value).finish(),
            Value::Str(value) => f.debug_tuple("Str").field(value).finish(),
            Value::Shared(value) => write!(f, "Shared({:p})", Rc::as_ptr(value)),
        }
    }
}

macro_rules! impl_from_for_value {
    ($variant:ident: $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::$variant(value.into())
                }
            }
        )*
    }
}

impl_from_for_value!(Bool: bool);
impl_from_for_value!(Int: i8, i16, i32, i64);
impl_from_for_value!(UInt: u8, u16, u32, u64);
impl_from_for_value!(Float: f32, f64);
impl_from_for_value!(Char: char);
impl_from_for_value!(Str: &str, String, Rc<str>);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Typed access to a [`Value`].
pub trait FromValue: Sized {
    /// Kind name reported when the conversion fails.
    const KIND: &'static str;

    /// Convert `value` into `Self`, or `None` if it has another kind.
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_from_value {
    ($($t:ty => $kind:literal, $variant:ident);*) => {
        $(
            impl FromValue for $t {
                const KIND: &'static str = $kind;

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(value) => Some(value.clone().into()),
                        _ => None,
                    }
                }
            }
        )*
    }
}

impl_from_value!(
    bool => "bool", Bool;
    i64 => "int", Int;
    u64 => "uint", UInt;
    f64 => "float", Float;
    char => "char", Char;
    Rc<str> => "str", Str
);

impl FromValue for String {
    const KIND: &'static str = "str";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(String::from)
    }
}

impl FromValue for Value {
    const KIND: &'static str = "value";

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_compares_scalars_by_value() {
        assert_eq!(Value::from(1), Value::Int(1));
        assert_eq!(Value::from("a"), Value::from(String::from("a")));
        assert_ne!(Value::from(1), Value::from("1"));
        assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
        assert_eq!(Value::from(None::<i32>), Value::Null);
    }

    #[test]
    fn it_compares_numbers_across_kinds() {
        assert_eq!(Value::Int(1), Value::UInt(1));
        assert_eq!(Value::UInt(1), Value::Float(1.));
        assert_eq!(Value::Float(0.), Value::Int(0));
        assert_eq!(Value::Float(-0.), Value::UInt(0));
        assert_ne!(Value::Int(-1), Value::UInt(u64::MAX));
        assert_ne!(Value::Int(1), Value::Float(1.5));
        assert_ne!(Value::Int(0), Value::Float(f64::NAN));
        assert_ne!(Value::UInt(u64::MAX), Value::Float(f64::INFINITY));
    }

    #[test]
    fn it_compares_shared_by_identity() {
        let a = Value::new_shared([1]);
        assert_eq!(a, a.clone());
        assert_ne!(a, Value::new_shared([1]));
        assert_eq!(a.downcast_ref::<[i32; 1]>(), Some(&[1]));
        assert_eq!(a.downcast_ref::<i32>(), None);
    }

    #[test]
    fn it_converts_to_typed_values() {
        assert_eq!(i64::from_value(&Value::Int(2)), Some(2));
        assert_eq!(i64::from_value(&Value::UInt(2)), None);
        assert_eq!(String::from_value(&Value::from("a")).as_deref(), Some("a"));
    }
}
