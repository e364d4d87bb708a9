use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Type-safe identifier wrapper around a string slug (e.g. "mulearn", "e1").
/// The phantom type parameter `T` prevents mixing IDs from different entity
/// types (e.g., Club ID vs Event ID).
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    pub value: String,
    #[serde(skip)]
    _phantom: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _phantom: PhantomData,
        }
    }

    /// Parse from user input, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self::new(trimmed))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Foo;

    #[test]
    fn ids_with_same_slug_are_equal() {
        let id1 = Id::<Foo>::new("mulearn");
        let id2 = Id::<Foo>::from("mulearn");
        assert_eq!(id1, id2);
    }

    #[test]
    fn parse_trims_and_rejects_blank() {
        assert_eq!(Id::<Foo>::parse("  e1 ").unwrap().as_str(), "e1");
        assert!(Id::<Foo>::parse("   ").is_none());
    }

    #[test]
    fn ids_order_by_slug() {
        let mut ids = vec![Id::<Foo>::new("e3"), Id::new("e1"), Id::new("e2")];
        ids.sort();
        let slugs: Vec<&str> = ids.iter().map(|i| i.as_str()).collect();
        assert_eq!(slugs, vec!["e1", "e2", "e3"]);
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = Id::<Foo>::new("ieee");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ieee\"");
        let back: Id<Foo> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
