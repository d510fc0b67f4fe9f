use std::collections::BTreeMap;
use std::collections::btree_map;

/// One data line's resolved columns, key excluded.
pub type Row = Vec<String>;

/// Result of a successful parse: every key maps to the rows recorded under it,
/// in the order the rows appeared in the input.
///
/// Keys iterate in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ParsedDocument {
    entries: BTreeMap<String, Vec<Row>>,
}

impl ParsedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: String, row: Row) {
        self.entries.entry(key).or_default().push(row);
    }

    pub fn get(&self, key: &str) -> Option<&[Row]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of rows across all keys.
    pub fn row_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<Row>> {
        self.entries
    }
}

impl From<BTreeMap<String, Vec<Row>>> for ParsedDocument {
    fn from(entries: BTreeMap<String, Vec<Row>>) -> Self {
        Self { entries }
    }
}

pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, Vec<Row>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a [Row]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(k, rows)| (k.as_str(), rows.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a ParsedDocument {
    type Item = (&'a str, &'a [Row]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ParsedDocument {
    type Item = (String, Vec<Row>);
    type IntoIter = btree_map::IntoIter<String, Vec<Row>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
