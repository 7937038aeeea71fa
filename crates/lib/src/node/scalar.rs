//! Leaf values stored inside a [`Node`](super::Node).

use std::fmt;

use crate::path::PathError;

/// A terminal value in a document tree.
///
/// Numbers keep their native width: signed integers are stored as
/// [`Scalar::Int`], unsigned integers that do not fit an `i64` as
/// [`Scalar::Uint`], everything else as [`Scalar::Float`]. Decoders asked to
/// preserve numeric precision hand numbers over as [`Scalar::Number`], which
/// keeps the source text and encodes back as a number.
///
/// ```
/// # use pathdoc::node::Scalar;
/// let name = Scalar::from("alice");
/// let age = Scalar::from(30);
///
/// assert!(name == "alice");
/// assert!(age == 30);
/// assert_eq!(Scalar::from(u64::MAX), Scalar::Uint(u64::MAX));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Scalar {
    /// Null / absent value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Unsigned integer above `i64::MAX`
    Uint(u64),
    /// Floating point number
    Float(f64),
    /// Number kept as its exact decimal text
    Number(String),
    /// UTF-8 text
    String(String),
    /// Opaque byte blob
    Bytes(Vec<u8>),
}

impl Scalar {
    /// Returns true if this is [`Scalar::Null`]
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Returns true for any of the numeric variants
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            Scalar::Int(_) | Scalar::Uint(_) | Scalar::Float(_) | Scalar::Number(_)
        )
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::Uint(_) => "uint",
            Scalar::Float(_) => "float",
            Scalar::Number(_) => "number",
            Scalar::String(_) => "string",
            Scalar::Bytes(_) => "bytes",
        }
    }

    /// Attempts to read a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to read a signed integer.
    ///
    /// `Uint` values are only returned when they fit.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int(n) => Some(*n),
            Scalar::Uint(n) => i64::try_from(*n).ok(),
            Scalar::Number(text) => text.parse().ok(),
            _ => None,
        }
    }

    /// Attempts to read an unsigned integer
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Scalar::Int(n) => u64::try_from(*n).ok(),
            Scalar::Uint(n) => Some(*n),
            Scalar::Number(text) => text.parse().ok(),
            _ => None,
        }
    }

    /// Attempts to read any number as a float
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(n) => Some(*n as f64),
            Scalar::Uint(n) => Some(*n as f64),
            Scalar::Float(n) => Some(*n),
            Scalar::Number(text) => text.parse().ok(),
            _ => None,
        }
    }

    /// The exact text of a [`Scalar::Number`]
    pub fn as_number_text(&self) -> Option<&str> {
        match self {
            Scalar::Number(text) => Some(text),
            _ => None,
        }
    }

    /// Attempts to read text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to read a byte blob
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Scalar::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Uint(n) => write!(f, "{n}"),
            Scalar::Float(n) => write!(f, "{n}"),
            Scalar::Number(text) => write!(f, "{text}"),
            Scalar::String(s) => write!(f, "{s}"),
            Scalar::Bytes(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => Scalar::Int(n),
            Err(_) => Scalar::Uint(value),
        }
    }
}

impl From<usize> for Scalar {
    fn from(value: usize) -> Self {
        Scalar::from(value as u64)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::Float(f64::from(value))
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<Vec<u8>> for Scalar {
    fn from(value: Vec<u8>) -> Self {
        Scalar::Bytes(value)
    }
}

impl From<()> for Scalar {
    fn from(_: ()) -> Self {
        Scalar::Null
    }
}

impl TryFrom<&Scalar> for String {
    type Error = PathError;

    fn try_from(value: &Scalar) -> Result<Self, Self::Error> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch("string", value))
    }
}

impl<'a> TryFrom<&'a Scalar> for &'a str {
    type Error = PathError;

    fn try_from(value: &'a Scalar) -> Result<Self, Self::Error> {
        value.as_str().ok_or_else(|| mismatch("string", value))
    }
}

impl TryFrom<&Scalar> for i64 {
    type Error = PathError;

    fn try_from(value: &Scalar) -> Result<Self, Self::Error> {
        value.as_i64().ok_or_else(|| mismatch("i64", value))
    }
}

impl TryFrom<&Scalar> for u64 {
    type Error = PathError;

    fn try_from(value: &Scalar) -> Result<Self, Self::Error> {
        value.as_u64().ok_or_else(|| mismatch("u64", value))
    }
}

impl TryFrom<&Scalar> for f64 {
    type Error = PathError;

    fn try_from(value: &Scalar) -> Result<Self, Self::Error> {
        value.as_f64().ok_or_else(|| mismatch("f64", value))
    }
}

impl TryFrom<&Scalar> for bool {
    type Error = PathError;

    fn try_from(value: &Scalar) -> Result<Self, Self::Error> {
        value.as_bool().ok_or_else(|| mismatch("bool", value))
    }
}

fn mismatch(expected: &str, found: &Scalar) -> PathError {
    PathError::TypeConversion {
        reason: format!("expected {expected}, found {}", found.type_name()),
    }
}

// PartialEq with primitives for ergonomic assertions
impl PartialEq<str> for Scalar {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Scalar {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Scalar {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<i64> for Scalar {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == Some(*other)
    }
}

impl PartialEq<i32> for Scalar {
    fn eq(&self, other: &i32) -> bool {
        self.as_i64() == Some(i64::from(*other))
    }
}

impl PartialEq<f64> for Scalar {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Scalar::Float(n) if n == other)
    }
}

impl PartialEq<bool> for Scalar {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}
