use crate::matchers::MatchResult;

pub use layout_job::LayoutJobTarget;
pub use marked::MarkedText;

mod layout_job;
mod marked;

/// Destination a single suggestion is drawn into.
pub trait RenderTarget {
    /// Tags the suggestion with a class identifying its mode.
    fn add_class(&mut self, class: &str);

    /// Draws the suggestion's main text with the matched ranges highlighted.
    fn render_results(&mut self, text: &str, matched: Option<&MatchResult>);

    /// Draws secondary text below the main text, such as a full path.
    fn render_note(&mut self, text: &str, matched: Option<&MatchResult>) {
        let _ = (text, matched);
    }
}

/// Splits `text` into `(segment, highlighted)` pieces.
///
/// Ranges that are out of bounds, overlap a previous range or do not fall on
/// char boundaries are ignored.
pub fn highlight_segments<'a>(text: &'a str, matched: Option<&MatchResult>) -> Vec<(&'a str, bool)> {
    let mut segments = Vec::new();
    let mut pos = 0;

    for &(start, end) in matched.map(|m| m.matches.as_slice()).unwrap_or_default() {
        if start < pos || start >= end {
            continue;
        }

        let (Some(before), Some(hit)) = (text.get(pos..start), text.get(start..end)) else {
            continue;
        };

        if !before.is_empty() {
            segments.push((before, false));
        }

        segments.push((hit, true));
        pos = end;
    }

    if pos < text.len() {
        segments.push((&text[pos..], false));
    }

    segments
}
