use std::sync::Arc;

use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::matchers::{MatchResult, Matchers, PreparedMatch};

/// Score penalty applied to a match on secondary text, so that it never
/// outranks an equally good match on the primary text.
pub const SECONDARY_MATCH_PENALTY: f64 = 1.0;

/// Which of the candidate strings produced a fallback match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchType {
    #[default]
    None,
    Primary,
    Basename,
    Path,
}

/// The two fallback strings identifying a path-like item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSegments {
    pub basename: String,
    pub path: String,
}

impl PathSegments {
    /// Uses the last `/` separated component of `path` as basename.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let basename = path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_owned();

        Self { basename, path }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SecondaryMatch {
    pub is_primary: bool,
    pub matched: MatchResult,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResultWithFallback {
    pub match_type: MatchType,

    /// The text the match offsets refer to.
    pub match_text: Option<String>,
    pub matched: Option<MatchResult>,
}

/// Applies one normalized query to many candidate strings.
///
/// The match function is prepared lazily on first use and then reused for
/// every call on this searcher.
pub struct StringSearcher {
    query: String,
    use_simple_search: bool,
    matchers: Arc<Matchers>,
    prepared: OnceCell<Option<PreparedMatch>>,
}

impl StringSearcher {
    /// Creates a searcher for `query`, trimmed and lower-cased. A missing query
    /// behaves like an empty one.
    pub fn create(query: Option<&str>, use_simple_search: bool, matchers: Arc<Matchers>) -> Self {
        let query = query.unwrap_or_default().trim().to_lowercase();

        Self {
            query,
            use_simple_search,
            matchers,
            prepared: OnceCell::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn has_search_term(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn execute_search(&self, text: &str) -> Option<MatchResult> {
        if text.is_empty() {
            return None;
        }

        let search = self
            .prepared
            .get_or_init(|| {
                self.matchers
                    .select(self.use_simple_search)
                    .prepare(&self.query)
            })
            .as_ref()?;

        search(text)
    }

    /// Matches `primary_text` first and falls back to `secondary_text`.
    /// A secondary match has its score lowered by [`SECONDARY_MATCH_PENALTY`].
    pub fn search_and_downrank_secondary_match(
        &self,
        primary_text: &str,
        secondary_text: Option<&str>,
    ) -> Option<SecondaryMatch> {
        if let Some(matched) = self.execute_search(primary_text) {
            return Some(SecondaryMatch { is_primary: true, matched });
        }

        let mut matched = self.execute_search(secondary_text?)?;
        matched.score -= SECONDARY_MATCH_PENALTY;

        Some(SecondaryMatch { is_primary: false, matched })
    }

    /// Matches `primary` and, failing that, the basename and then the full
    /// path of `segments`.
    ///
    /// The path is searched as one string, so a query spanning a folder and
    /// the file name (`"to my"` against `"path/to/myfile.md"`) can only ever
    /// be found as a [`MatchType::Path`] match.
    pub fn search_with_fallback(
        &self,
        primary: &str,
        segments: Option<&PathSegments>,
    ) -> SearchResultWithFallback {
        if let Some(result) = self.search_and_downrank_secondary_match(primary, None) {
            return SearchResultWithFallback {
                match_type: MatchType::Primary,
                match_text: Some(primary.to_owned()),
                matched: Some(result.matched),
            };
        }

        let fallback = segments.and_then(|segments| {
            let result = self.search_and_downrank_secondary_match(&segments.basename, Some(&segments.path))?;

            let (match_type, text) = if result.is_primary {
                (MatchType::Basename, &segments.basename)
            } else {
                (MatchType::Path, &segments.path)
            };

            Some(SearchResultWithFallback {
                match_type,
                match_text: Some(text.clone()),
                matched: Some(result.matched),
            })
        });

        fallback.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn searcher(query: Option<&str>) -> StringSearcher {
        StringSearcher::create(query, false, Arc::new(Matchers::default()))
    }

    #[test]
    fn query_is_trimmed_and_lowercased() {
        let searcher = searcher(Some("  Open FILE "));
        assert_eq!(searcher.query(), "open file");
        assert!(searcher.has_search_term());
    }

    #[test]
    fn missing_query_has_no_search_term() {
        let searcher = searcher(None);
        assert!(!searcher.has_search_term());
        assert!(searcher.execute_search("anything").is_none());
    }

    #[test]
    fn empty_text_never_matches() {
        assert!(searcher(Some("a")).execute_search("").is_none());
    }

    #[test]
    fn path_segments_from_path() {
        let segments = PathSegments::from_path("/home/me/vaults/work/");
        assert_eq!(segments.basename, "work");
        assert_eq!(segments.path, "/home/me/vaults/work/");
    }

    #[test]
    fn fallback_without_segments_is_none() {
        let result = searcher(Some("zzz")).search_with_fallback("", None);
        assert_eq!(result, SearchResultWithFallback::default());
        assert_eq!(result.match_type, MatchType::None);
    }
}
