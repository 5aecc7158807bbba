use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// FrequencyMap – keyword → occurrence count
// ---------------------------------------------------------------------------

/// Running keyword counts.  `BTreeMap` keeps iteration alphabetical, which
/// makes the tie order of the final table reproducible across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: BTreeMap<String, u64>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `keyword`.
    pub fn add(&mut self, keyword: impl Into<String>) {
        *self.counts.entry(keyword.into()).or_default() += 1;
    }

    /// Count every keyword produced by `keywords`.
    pub fn extend<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for kw in keywords {
            self.add(kw);
        }
    }

    /// Fold another map into this one.
    pub fn merge(&mut self, other: FrequencyMap) {
        for (kw, n) in other.counts {
            *self.counts.entry(kw).or_default() += n;
        }
    }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens seen.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, &n)| (k.as_str(), n))
    }
}

#[cfg(test)]
impl FrequencyMap {
    pub fn get(&self, keyword: &str) -> u64 {
        self.counts.get(keyword).copied().unwrap_or(0)
    }
}

impl<S: Into<String>> FromIterator<S> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut map = FrequencyMap::new();
        map.extend(iter);
        map
    }
}

// ---------------------------------------------------------------------------
// KeywordFrequency – one row of the output table
// ---------------------------------------------------------------------------

/// A single (keyword, count) record.  Field names map to the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordFrequency {
    #[serde(rename = "Keyword")]
    pub keyword: String,
    #[serde(rename = "Frequency")]
    pub frequency: u64,
}

impl fmt::Display for KeywordFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.keyword, self.frequency)
    }
}

// ---------------------------------------------------------------------------
// FrequencyTable – the ordered record set
// ---------------------------------------------------------------------------

/// Records sorted by frequency (descending), then keyword (ascending).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    records: Vec<KeywordFrequency>,
}

impl FrequencyTable {
    /// Build the ordered record set from a frequency map.
    pub fn from_map(map: &FrequencyMap) -> Self {
        let mut records: Vec<KeywordFrequency> = map
            .iter()
            .map(|(keyword, frequency)| KeywordFrequency {
                keyword: keyword.to_string(),
                frequency,
            })
            .collect();
        // Map iteration is alphabetical and the sort is stable, so equal
        // counts stay in keyword order.
        records.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        FrequencyTable { records }
    }

    pub fn records(&self) -> &[KeywordFrequency] {
        &self.records
    }

    /// The first `n` records (all of them if there are fewer).
    pub fn top(&self, n: usize) -> &[KeywordFrequency] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.records.iter().map(|r| r.frequency).sum()
    }
}
