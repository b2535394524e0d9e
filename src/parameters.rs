use std::collections::btree_map::{self, BTreeMap};

use serde::Serialize;

/// Query fields sent with a request, kept sorted by key.
///
/// Keys are ordered by plain byte comparison, which is the order OAuth 1.0a
/// requires for the signature base string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFields(BTreeMap<String, String>);

impl QueryFields {
    pub fn new() -> Self {
        Default::default()
    }

    /// Builds the fields from any value `serde_urlencoded` can serialize,
    /// e.g. a struct, a map or a sequence of pairs.
    ///
    /// Repeated keys keep the last value.
    pub fn from_serialize<T: Serialize + ?Sized>(
        query: &T,
    ) -> Result<Self, serde_urlencoded::ser::Error> {
        let encoded = serde_urlencoded::to_string(query)?;
        Ok(url::form_urlencoded::parse(encoded.as_bytes())
            .into_owned()
            .collect())
    }

    /// Insert a field, returning the previous value of `key`.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<String>
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
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

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        QueryFields(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for QueryFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<BTreeMap<String, String>> for QueryFields {
    fn from(map: BTreeMap<String, String>) -> Self {
        QueryFields(map)
    }
}

impl IntoIterator for QueryFields {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryFields {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for QueryFields {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
