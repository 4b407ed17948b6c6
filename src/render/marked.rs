use std::fmt;

use crate::matchers::MatchResult;
use crate::render::{highlight_segments, RenderTarget};

/// Plain text rendering that wraps highlighted ranges in brackets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkedText {
    pub classes: Vec<String>,
    pub title: String,
    pub note: Option<String>,
}

fn mark(text: &str, matched: Option<&MatchResult>) -> String {
    highlight_segments(text, matched)
        .into_iter()
        .map(|(segment, highlighted)| {
            if highlighted {
                format!("[{segment}]")
            } else {
                segment.to_owned()
            }
        })
        .collect()
}

impl RenderTarget for MarkedText {
    fn add_class(&mut self, class: &str) {
        self.classes.push(class.to_owned());
    }

    fn render_results(&mut self, text: &str, matched: Option<&MatchResult>) {
        self.title = mark(text, matched);
    }

    fn render_note(&mut self, text: &str, matched: Option<&MatchResult>) {
        self.note = Some(mark(text, matched));
    }
}

impl fmt::Display for MarkedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;

        if let Some(note) = &self.note {
            write!(f, "  ({note})")?;
        }

        Ok(())
    }
}
