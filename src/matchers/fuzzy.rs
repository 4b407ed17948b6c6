use std::sync::Arc;

use fuzzy_matcher::skim::SkimMatcherV2;

use crate::matchers::{merge_spans, MatchResult, Matcher, PreparedMatch};

/// Adapts any `fuzzy_matcher` implementation into a match delegate.
pub struct FuzzyMatcher<T>(Arc<T>);

impl<T> FuzzyMatcher<T> {
    pub fn new(matcher: T) -> Self {
        Self(Arc::new(matcher))
    }
}

impl FuzzyMatcher<SkimMatcherV2> {
    /// Case insensitive skim matching.
    pub fn skim() -> Self {
        Self::new(SkimMatcherV2::default().ignore_case())
    }
}

impl Default for FuzzyMatcher<SkimMatcherV2> {
    fn default() -> Self {
        Self::skim()
    }
}

impl<T> Matcher for FuzzyMatcher<T>
    where T: fuzzy_matcher::FuzzyMatcher + Send + Sync + 'static,
{
    fn prepare(&self, query: &str) -> Option<PreparedMatch> {
        // whitespace separates query parts, it does not need to appear in the text
        let query: String = query.split_whitespace().collect();
        if query.is_empty() {
            return None;
        }

        let matcher = Arc::clone(&self.0);

        Some(Box::new(move |text: &str| {
            let (score, indices) = matcher.fuzzy_indices(text, &query)?;

            Some(MatchResult {
                matches: char_spans(text, indices),
                score: score as f64,
            })
        }))
    }
}

/// Converts char indices reported by the fuzzy matcher into byte ranges.
fn char_spans(text: &str, mut indices: Vec<usize>) -> Vec<(usize, usize)> {
    indices.sort_unstable();
    indices.dedup();
    let mut wanted = indices.into_iter().peekable();

    let mut spans = Vec::new();
    for (char_idx, (byte_idx, ch)) in text.char_indices().enumerate() {
        if wanted.peek().is_none() {
            break;
        }

        if wanted.next_if_eq(&char_idx).is_some() {
            spans.push((byte_idx, byte_idx + ch.len_utf8()));
        }
    }

    merge_spans(spans)
}
