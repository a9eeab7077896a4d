/// A query parameter as the caller supplied it.
///
/// `Unset` means the caller never mentioned the parameter, `Null` means it was
/// explicitly given no value. Neither reaches the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Param<T> {
    #[default]
    Unset,
    Null,
    Value(T),
}

impl<T> Param<T> {
    /// `None` becomes an explicit `Null`, never `Unset`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Param::Value(value),
            None => Param::Null,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Param::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Param::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Param::Value(value) => Some(value),
            Param::Unset | Param::Null => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Param::Value(value) => Some(value),
            Param::Unset | Param::Null => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Param<U> {
        match self {
            Param::Unset => Param::Unset,
            Param::Null => Param::Null,
            Param::Value(value) => Param::Value(f(value)),
        }
    }
}

impl<T> From<T> for Param<T> {
    fn from(value: T) -> Self {
        Param::Value(value)
    }
}

impl<T> From<Option<T>> for Param<T> {
    fn from(value: Option<T>) -> Self {
        Param::from_option(value)
    }
}
