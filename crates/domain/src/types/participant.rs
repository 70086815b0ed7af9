//! Meeting participants and the name → email lookup built from document text

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A `(name, email)` pair found in the meeting document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub email: String,
}

impl Participant {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into() }
    }

    /// First whitespace-delimited token of the name.
    pub fn first_name(&self) -> Option<&str> {
        self.name.split_whitespace().next()
    }
}

/// Name → email lookup keyed by full name and by first name.
///
/// Later inserts overwrite earlier ones for the same key, so when two
/// participants share a first name the one scanned last wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameLookup {
    entries: HashMap<String, String>,
}

impl NameLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a participant under its full name and its first name.
    pub fn register(&mut self, participant: &Participant) {
        self.entries.insert(participant.name.clone(), participant.email.clone());
        if let Some(first) = participant.first_name() {
            self.entries.insert(first.to_string(), participant.email.clone());
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, email: impl Into<String>) {
        self.entries.insert(key.into(), email.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for NameLookup
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut lookup = Self::new();
        for (key, email) in iter {
            lookup.insert(key, email);
        }
        lookup
    }
}
