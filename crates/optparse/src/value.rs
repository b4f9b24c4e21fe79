use crate::Error;
use crate::Result;

/// Literal bound for flags and for value options used without a value
pub const TRUE: &str = "true";

/// A resolved option or positional argument
///
/// Values are kept as the text that was parsed; conversions happen on access and report
/// [`ErrorKind::Conversion`][crate::ErrorKind::Conversion] for malformed text.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Value(String);

impl Value {
    /// Wrap parsed text
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub(crate) fn truthy() -> Self {
        Self::new(TRUE)
    }

    /// The text as parsed
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap the text
    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether the text is empty, as for an unset default
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Interpret as a boolean
    ///
    /// Accepts `true` and `false`.  An empty value, as left by an unset default, is `false`.
    pub fn to_bool(&self) -> Result<bool> {
        match self.as_str() {
            "" => Ok(false),
            value => value
                .parse()
                .map_err(|e| Error::conversion(value, "boolean", e)),
        }
    }

    /// Interpret as an `i16`
    pub fn to_i16(&self) -> Result<i16> {
        self.parse_as("integer")
    }

    /// Interpret as an `i32`
    pub fn to_i32(&self) -> Result<i32> {
        self.parse_as("integer")
    }

    /// Interpret as an `i64`
    pub fn to_i64(&self) -> Result<i64> {
        self.parse_as("integer")
    }

    /// Interpret as a `u16`
    pub fn to_u16(&self) -> Result<u16> {
        self.parse_as("unsigned integer")
    }

    /// Interpret as a `u32`
    pub fn to_u32(&self) -> Result<u32> {
        self.parse_as("unsigned integer")
    }

    /// Interpret as a `u64`
    pub fn to_u64(&self) -> Result<u64> {
        self.parse_as("unsigned integer")
    }

    /// Interpret as an `f32`, e.g. `42.42`
    pub fn to_f32(&self) -> Result<f32> {
        self.parse_as("number")
    }

    /// Interpret as an `f64`
    pub fn to_f64(&self) -> Result<f64> {
        self.parse_as("number")
    }

    /// Convert with [`FromStr`][std::str::FromStr]
    pub fn parse<T>(&self) -> Result<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        self.parse_as(std::any::type_name::<T>())
    }

    fn parse_as<T>(&self, ty: &str) -> Result<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let value = self.as_str();
        value.parse().map_err(|e| Error::conversion(value, ty, e))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for Value {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<Value> for String {
    fn from(value: Value) -> Self {
        value.0
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
