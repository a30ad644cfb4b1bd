use crate::model::ApplicationEntry;
use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Matcher, Utf32Str};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Case-insensitive substring of the name.
    #[default]
    Substring,
    /// Any name containing each whitespace-separated word as a subsequence, ignoring
    /// case. Query characters are literal; no `!`, `^`, `$` or `'` operators.
    Fuzzy,
}

/// Entries of `catalog` whose name contains `query`, ignoring case, in catalog order.
pub fn filter<'a>(catalog: &'a [ApplicationEntry], query: &str) -> Vec<&'a ApplicationEntry> {
    let needle = query.to_lowercase();
    catalog.iter().filter(|entry| contains_ignore_case(&entry.name, &needle)).collect()
}

fn contains_ignore_case(name: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || name.to_lowercase().contains(needle_lower)
}

pub struct QueryMatcher {
    mode: MatchMode,
    matcher: Matcher,
    buf: Vec<char>,
}

impl Default for QueryMatcher {
    fn default() -> Self {
        Self::new(MatchMode::default())
    }
}

impl QueryMatcher {
    pub fn new(mode: MatchMode) -> Self {
        Self {
            mode,
            matcher: Matcher::new(nucleo_matcher::Config::DEFAULT),
            buf: Vec::new(),
        }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Indices into `entries` that match `query`, ascending. Scores never reorder the result.
    pub fn matching_indices(&mut self, query: &str, entries: &[ApplicationEntry]) -> Vec<usize> {
        if query.is_empty() {
            return (0..entries.len()).collect();
        }

        match self.mode {
            MatchMode::Substring => {
                let needle = query.to_lowercase();
                entries.iter().enumerate()
                    .filter(|(_, e)| contains_ignore_case(&e.name, &needle))
                    .map(|(i, _)| i)
                    .collect()
            }
            MatchMode::Fuzzy => {
                let pattern = Pattern::new(query, CaseMatching::Ignore, Normalization::Smart, AtomKind::Fuzzy);
                let mut indices = Vec::new();
                for (i, entry) in entries.iter().enumerate() {
                    let haystack = Utf32Str::new(&entry.name, &mut self.buf);
                    if pattern.score(haystack, &mut self.matcher).is_some() {
                        indices.push(i);
                    }
                }
                indices
            }
        }
    }
}
