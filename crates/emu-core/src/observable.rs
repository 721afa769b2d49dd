//! Observability trait for inspecting component state.
//!
//! Queries never affect emulation state.

use std::fmt;

/// A dynamically-typed value returned by state queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    String(String),
    Array(Vec<Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "${v:02X}"),
            Value::U16(v) => write!(f, "${v:04X}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::String(v) => f.write_str(v),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

macro_rules! value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

value_from! {
    bool => Bool,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    String => String,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

/// A component whose state can be inspected.
pub trait Observable {
    /// Query a specific property by path.
    ///
    /// Paths are dot-separated, e.g. `pc`, `flags.z`, `raster.line`.
    /// Returns `None` if the path is not recognised.
    fn query(&self, path: &str) -> Option<Value>;

    /// All paths accepted by [`Observable::query`].
    fn query_paths(&self) -> &'static [&'static str];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_hex_for_bytes_and_words() {
        assert_eq!(Value::from(0x0Au8).to_string(), "$0A");
        assert_eq!(Value::from(0x1C00u16).to_string(), "$1C00");
        assert_eq!(Value::from(17_045u64).to_string(), "17045");
    }

    #[test]
    fn arrays_display_comma_separated() {
        let v = Value::from(vec![1u8, 2, 3]);
        assert_eq!(v.to_string(), "[$01, $02, $03]");
    }
}
