use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free class membership of one element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassList(IndexSet<String>);

impl ClassList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, class: impl Into<String>) -> Self {
        self.add(class);
        self
    }

    /// Returns `true` when the class was not present before.
    pub fn add(&mut self, class: impl Into<String>) -> bool {
        self.0.insert(class.into())
    }

    /// Returns `true` when the class was present before.
    pub fn remove(&mut self, class: &str) -> bool {
        self.0.shift_remove(class)
    }

    /// Adds or removes `class` so membership equals `present`.
    pub fn set(&mut self, class: &str, present: bool) -> bool {
        if present {
            self.add(class)
        } else {
            self.remove(class)
        }
    }

    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ClassList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
