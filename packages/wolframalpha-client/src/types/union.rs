//! Fields whose JSON shape varies between responses.

use serde::{Deserialize, Deserializer};

/// A field that arrives as a single object, a list of objects, or not at all.
///
/// The API picks the shape per response, so callers branch on the arm
/// instead of checking two optional fields.
#[derive(Debug, Clone, PartialEq)]
pub enum OneOrMany<T> {
    Absent,
    Single(T),
    List(Vec<T>),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Absent
    }
}

impl<T> OneOrMany<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, OneOrMany::Absent)
    }

    /// Number of values present.
    pub fn len(&self) -> usize {
        match self {
            OneOrMany::Absent => 0,
            OneOrMany::Single(_) => 1,
            OneOrMany::List(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the values regardless of arm.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            OneOrMany::Absent => [].iter(),
            OneOrMany::Single(item) => std::slice::from_ref(item).iter(),
            OneOrMany::List(items) => items.iter(),
        }
    }

    /// First value, if any.
    pub fn first(&self) -> Option<&T> {
        self.iter().next()
    }
}

impl<'a, T> IntoIterator for &'a OneOrMany<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OneOrMany<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shape<T> {
            List(Vec<T>),
            Single(T),
        }

        Ok(match Option::<Shape<T>>::deserialize(deserializer)? {
            None => OneOrMany::Absent,
            Some(Shape::List(items)) => OneOrMany::List(items),
            Some(Shape::Single(item)) => OneOrMany::Single(item),
        })
    }
}

/// The `error` field of a result: `false`, or a structured error (e.g. a
/// bad app id).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Failure {
    Flag(bool),
    Detail(QueryError),
}

impl Failure {
    /// Structured detail, when the API sent one.
    pub fn detail(&self) -> Option<&QueryError> {
        match self {
            Failure::Flag(_) => None,
            Failure::Detail(detail) => Some(detail),
        }
    }

    /// Whether this signals an error at all (`false` does not).
    pub fn is_error(&self) -> bool {
        match self {
            Failure::Flag(flag) => *flag,
            Failure::Detail(_) => true,
        }
    }
}

/// What went wrong while generating a result.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QueryError {
    pub code: String,
    pub msg: String,
}
