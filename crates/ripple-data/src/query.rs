use chrono::{DateTime, SecondsFormat, Utc};

/// Query-string parameters for a Data API request, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key=value`. A repeated key is replaced, not appended.
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        let key = key.into();
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((key, value)),
        }
        self
    }

    /// Booleans go over the wire as `true`/`false`.
    pub fn flag(self, key: impl Into<String>, value: bool) -> Self {
        self.param(key, value)
    }

    /// Timestamps go over the wire as RFC 3339 in UTC, e.g. `2018-01-01T00:00:00Z`.
    pub fn time(self, key: impl Into<String>, at: DateTime<Utc>) -> Self {
        self.param(key, at.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn limit(self, limit: u32) -> Self {
        self.param("limit", limit)
    }

    pub fn marker(self, marker: impl Into<String>) -> Self {
        self.param("marker", marker.into())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Query::new(), |query, (k, v)| query.param(k, v))
    }
}
