//! The value model the dumper renders.
//!
//! [`Value`] is a closed sum type mirroring the shapes a PHP value can take.
//! Arrays and objects are shared handles so that values can reference each
//! other, which is also what makes cycles expressible (and detectable).

mod array;
mod key;
mod literal;
mod object;
mod special;

use std::{fmt, rc::Rc};

pub use array::Array;
pub use key::Key;
pub use literal::Literal;
pub use object::{Object, Property, STD_CLASS, Visibility};
pub use special::{Closure, DateTimeClass, DateTimeValue, EnumCase, Resource, Serializable};

/// A PHP string: an arbitrary byte sequence.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct PhpString(Vec<u8>);

impl PhpString {
    /// Create a string from raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The string as UTF-8, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for PhpString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(&self.0))
    }
}

impl From<&str> for PhpString {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for PhpString {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<&[u8]> for PhpString {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Vec<u8>> for PhpString {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// A value that can be rendered as a PHP expression.
#[derive(Debug, Clone)]
pub enum Value {
    /// `null`
    Null,
    /// `true` / `false`
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// Float literal.
    Float(f64),
    /// String literal, single- or double-quoted depending on content.
    String(PhpString),
    /// Ordered map / list.
    Array(Array),
    /// Pre-formatted PHP code inserted verbatim.
    Literal(Literal),
    /// Enum case (`\Suit::Hearts`).
    Enum(EnumCase),
    /// `DateTime` / `DateTimeImmutable` instance.
    DateTime(DateTimeValue),
    /// Object rendered through `unserialize()` of its serialized form.
    Serializable(Rc<dyn Serializable>),
    /// First-class callable.
    Closure(Closure),
    /// Object reconstructed from its properties.
    Object(Object),
    /// Resource handle; never representable.
    Resource(Resource),
}

impl Value {
    /// Create a string value.
    pub fn string(v: impl Into<PhpString>) -> Self {
        Self::String(v.into())
    }

    /// Create a list (keys `0..n`) from values.
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Array(Array::list(values))
    }

    /// Create an ordered map from key/value pairs.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        Self::Array(Array::from_entries(entries))
    }

    /// Create a raw code literal.
    pub fn literal(code: impl Into<String>) -> Self {
        Self::Literal(Literal::new(code))
    }

    /// Create an enum case value.
    pub fn enum_case(class: impl Into<String>, case: impl Into<String>) -> Self {
        Self::Enum(EnumCase::new(class, case))
    }

    /// Short name of the value's shape, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Literal(_) => "literal",
            Self::Enum(_) => "enum",
            Self::DateTime(_) => "datetime",
            Self::Serializable(_) => "serializable object",
            Self::Closure(_) => "closure",
            Self::Object(_) => "object",
            Self::Resource(_) => "resource",
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v.into())
    }
}

impl From<PhpString> for Value {
    fn from(v: PhpString) -> Self {
        Self::String(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl From<Literal> for Value {
    fn from(v: Literal) -> Self {
        Self::Literal(v)
    }
}

impl From<EnumCase> for Value {
    fn from(v: EnumCase) -> Self {
        Self::Enum(v)
    }
}

impl From<DateTimeValue> for Value {
    fn from(v: DateTimeValue) -> Self {
        Self::DateTime(v)
    }
}

impl From<Closure> for Value {
    fn from(v: Closure) -> Self {
        Self::Closure(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
