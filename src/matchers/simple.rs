use itertools::Itertools;

use crate::matchers::{merge_spans, MatchResult, Matcher, PreparedMatch};

/// Substring matcher: every whitespace separated part of the query must
/// occur somewhere in the text. Cheaper than fuzzy matching on large sets.
pub struct SimpleMatcher;

impl Matcher for SimpleMatcher {
    fn prepare(&self, query: &str) -> Option<PreparedMatch> {
        let query_parts = query
            .split_whitespace()
            .map(|part| part.chars().collect_vec())
            .collect_vec();

        if query_parts.is_empty() {
            return None;
        }

        Some(Box::new(move |text: &str| {
            let spans = query_parts
                .iter()
                .map(|part| find_ignore_case(text, part))
                .collect::<Option<Vec<_>>>()?;

            let matches = merge_spans(spans);

            // earlier matches score higher, always within (-1, 0]
            let first = matches.first().map_or(0, |(start, _)| *start);
            let score = -(first as f64) / text.len().max(1) as f64;

            Some(MatchResult { matches, score })
        }))
    }
}

fn find_ignore_case(haystack: &str, needle: &[char]) -> Option<(usize, usize)> {
    haystack.char_indices().find_map(|(start, _)| {
        let mut rest = haystack[start..].chars();
        let mut end = start;

        for expected in needle {
            let ch = rest.next()?;
            if !ch.to_lowercase().eq(expected.to_lowercase()) {
                return None;
            }

            end += ch.len_utf8();
        }

        Some((start, end))
    })
}
