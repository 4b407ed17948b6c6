use egui::text::LayoutJob;
use egui::{Color32, FontId, TextFormat};

use crate::matchers::MatchResult;
use crate::render::{highlight_segments, RenderTarget};

/// Renders a suggestion into an egui [`LayoutJob`], ready to be shown in a label.
pub struct LayoutJobTarget {
    pub classes: Vec<String>,
    pub job: LayoutJob,
    text_color: Color32,
    highlight_color: Color32,
    note_color: Color32,
}

impl Default for LayoutJobTarget {
    fn default() -> Self {
        Self::new(Color32::WHITE, Color32::GOLD)
    }
}

impl LayoutJobTarget {
    pub fn new(text_color: Color32, highlight_color: Color32) -> Self {
        Self {
            classes: Vec::new(),
            job: LayoutJob::default(),
            text_color,
            highlight_color,
            note_color: Color32::GRAY,
        }
    }

    fn append(&mut self, text: &str, matched: Option<&MatchResult>, font_id: FontId, color: Color32) {
        for (segment, highlighted) in highlight_segments(text, matched) {
            let format = TextFormat {
                font_id: font_id.clone(),
                color: if highlighted { self.highlight_color } else { color },
                ..Default::default()
            };

            self.job.append(segment, 0.0, format);
        }
    }
}

impl RenderTarget for LayoutJobTarget {
    fn add_class(&mut self, class: &str) {
        self.classes.push(class.to_owned());
    }

    fn render_results(&mut self, text: &str, matched: Option<&MatchResult>) {
        self.append(text, matched, FontId::monospace(14.0), self.text_color);
    }

    fn render_note(&mut self, text: &str, matched: Option<&MatchResult>) {
        self.job.append("\n", 0.0, TextFormat::default());
        self.append(text, matched, FontId::monospace(11.0), self.note_color);
    }
}
