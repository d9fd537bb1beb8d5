use std::collections::HashMap;

/// A value stored in a [`Bag`](crate::Bag).
///
/// `Value` is a tagged union over the shapes a bag can hold. Callers that know
/// what shape they stored usually never touch this type directly — the typed
/// getters on `Bag` unwrap it for them. It becomes visible when using
/// [`Bag::get`](crate::Bag::get), which hands back whatever was stored without
/// asserting a shape.
///
/// # Examples
///
/// ```rust
/// use sovran_bag::Value;
///
/// let v: Value = "hello".into();
/// assert_eq!(v.as_str(), Some("hello"));
/// assert_eq!(v.as_int(), None); // wrong shape, not an error
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A UTF-8 string.
    String(String),
    /// A signed integer.
    Int(i64),
    /// A boolean.
    Bool(bool),
    /// An opaque byte sequence.
    Bytes(Vec<u8>),
    /// A nested string-to-string mapping.
    StringMap(HashMap<String, String>),
}

impl Value {
    /// Returns the contained string, or `None` if this value has another shape.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the contained integer, or `None` if this value has another shape.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the contained boolean, or `None` if this value has another shape.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the contained byte sequence, or `None` if this value has another shape.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the contained string map, or `None` if this value has another shape.
    pub fn as_string_map(&self) -> Option<&HashMap<String, String>> {
        match self {
            Value::StringMap(m) => Some(m),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

// Unannotated integer literals are i32, so accept them too.
impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(b.to_vec())
    }
}

impl From<HashMap<String, String>> for Value {
    fn from(m: HashMap<String, String>) -> Self {
        Value::StringMap(m)
    }
}
