use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use fuzzy::FuzzyMatcher;
pub use simple::SimpleMatcher;

mod fuzzy;
mod simple;

/// The outcome of matching a query against a single piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Byte ranges (`start..end`) of the matched text that should be highlighted,
    /// ordered by position.
    pub matches: Vec<(usize, usize)>,

    /// Higher is better.
    pub score: f64,
}

/// A match function prepared for one specific query.
pub type PreparedMatch = Box<dyn Fn(&str) -> Option<MatchResult> + Send + Sync>;

pub trait Matcher: Send + Sync {
    /// Builds the match function for `query`. Returns `None` if no function
    /// can be built for this query, e.g. because it is empty.
    fn prepare(&self, query: &str) -> Option<PreparedMatch>;
}

/// The two interchangeable match delegates a searcher can choose from.
#[derive(Clone)]
pub struct Matchers {
    pub fuzzy: Arc<dyn Matcher>,
    pub simple: Arc<dyn Matcher>,
}

impl Matchers {
    pub fn new(fuzzy: Arc<dyn Matcher>, simple: Arc<dyn Matcher>) -> Self {
        Self { fuzzy, simple }
    }

    pub fn select(&self, use_simple_search: bool) -> &dyn Matcher {
        if use_simple_search {
            self.simple.as_ref()
        } else {
            self.fuzzy.as_ref()
        }
    }
}

impl Default for Matchers {
    fn default() -> Self {
        Self::new(Arc::new(FuzzyMatcher::skim()), Arc::new(SimpleMatcher))
    }
}

/// Sorts and merges overlapping or touching ranges.
fn merge_spans(mut spans: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    spans.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
    for (start, end) in spans {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    merged
}
