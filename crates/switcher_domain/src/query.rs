use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Single(String),
    Multiple(Vec<String>),
}

impl QueryValue {
    fn push(&mut self, value: String) {
        match self {
            QueryValue::Single(existing) => {
                let existing = std::mem::take(existing);
                *self = QueryValue::Multiple(vec![existing, value]);
            }
            QueryValue::Multiple(values) => values.push(value),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Single(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Single(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        QueryValue::Multiple(values)
    }
}

/// Router query parameters: dynamic route params merged with search params.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouterQuery(BTreeMap<String, QueryValue>);

impl RouterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects `(key, value)` pairs. Repeated keys collapse into a list in arrival order.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut out = Self::new();
        for (key, value) in pairs {
            out.append(key.into(), value.into());
        }
        out
    }

    /// Parses a search string such as `?q=select%20*&limit=10` with form decoding.
    /// Malformed escapes are kept verbatim.
    pub fn parse_search(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        Self::from_pairs(form_urlencoded::parse(search.as_bytes()).into_owned())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.0.insert(key.into(), value.into());
    }

    fn append(&mut self, key: String, value: String) {
        match self.0.get_mut(&key) {
            Some(existing) => existing.push(value),
            None => {
                self.0.insert(key, QueryValue::Single(value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
