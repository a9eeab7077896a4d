use std::fmt::{self, Display};

/// Scalar that can travel in a query string.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Int(value) => write!(f, "{}", value),
            QueryValue::Float(value) => write!(f, "{}", value),
            QueryValue::Bool(value) => write!(f, "{}", value),
            QueryValue::Str(value) => f.write_str(value),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(value: $ty) -> Self {
                    QueryValue::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for QueryValue {
    fn from(value: f32) -> Self {
        QueryValue::Float(f64::from(value))
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}
