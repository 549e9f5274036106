//! Token frequency counting.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A token and the number of times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    /// The token.
    pub token: String,
    /// Occurrence count.
    pub count: usize,
}

/// Tokens ordered by descending count; ties keep first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Returns the entries in rank order.
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyEntry> {
        self.entries.iter()
    }

    /// Entries as borrowed `(token, count)` pairs.
    pub fn as_pairs(&self) -> Vec<(&str, usize)> {
        self.entries.iter().map(|e| (e.token.as_str(), e.count)).collect()
    }
}

impl IntoIterator for FrequencyTable {
    type Item = FrequencyEntry;
    type IntoIter = std::vec::IntoIter<FrequencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a FrequencyEntry;
    type IntoIter = std::slice::Iter<'a, FrequencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.entries.iter().map(|e| e.token.chars().count()).max().unwrap_or(0);
        for entry in &self.entries {
            writeln!(f, "{:<width$}  {}", entry.token, entry.count, width = width)?;
        }
        Ok(())
    }
}

/// Counts tokens and returns the `amount` most frequent.
///
/// An `amount` of zero yields an empty table; an `amount` above the number of
/// distinct tokens yields all of them.
pub fn compute_frequency<S: AsRef<str>>(tokens: &[S], amount: usize) -> FrequencyTable {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<FrequencyEntry> = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        match index.get(token) {
            Some(&i) => entries[i].count += 1,
            None => {
                index.insert(token, entries.len());
                entries.push(FrequencyEntry {
                    token: token.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-occurrence order among equal counts.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(amount);

    FrequencyTable { entries }
}
