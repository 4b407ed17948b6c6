use std::sync::Arc;

use log::error;
use serde::{Deserialize, Serialize};

use crate::handlers::{collect_suggestions, validation, Handler, HandlerContext};
use crate::host::{CorePlugin, FileRef, Navigator, OpenOptions, StarredItem, StarredItems, VaultFiles};
use crate::input::{ChooseEvent, InputInfo, Mode, Validation};
use crate::render::RenderTarget;
use crate::suggestion::{ModeSuggestion, Suggestion};

/// A starred file that still exists in the vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarredFile {
    pub file: FileRef,

    /// Always the current basename of `file`, never the persisted title.
    pub title: String,
}

pub struct StarredHandler {
    ctx: HandlerContext,
    starred: Arc<dyn StarredItems>,
    files: Arc<dyn VaultFiles>,
    navigator: Arc<dyn Navigator>,
}

impl StarredHandler {
    pub fn new(
        ctx: HandlerContext,
        starred: Arc<dyn StarredItems>,
        files: Arc<dyn VaultFiles>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self { ctx, starred, files, navigator }
    }

    fn is_enabled(&self) -> bool {
        self.ctx.is_enabled(CorePlugin::Starred)
    }

    /// Starred files in starred order. Saved searches and entries whose file
    /// no longer exists are skipped.
    pub fn get_items(&self) -> Vec<StarredFile> {
        if !self.is_enabled() {
            return Vec::new();
        }

        self.starred
            .starred_items()
            .into_iter()
            .filter_map(|item| match item {
                StarredItem::File { path, .. } => self.files.file_by_path(&path),
                StarredItem::Search { .. } => None,
            })
            .map(|file| StarredFile {
                title: file.basename().to_owned(),
                file,
            })
            .collect()
    }
}

impl Handler for StarredHandler {
    fn mode(&self) -> Mode {
        Mode::StarredList
    }

    fn command_string(&self) -> &str {
        self.ctx.trigger(self.mode())
    }

    fn validate_command(&self, index: usize, filter_text: &str) -> Validation {
        validation(self.mode(), index, filter_text, self.is_enabled())
    }

    fn get_suggestions(&self, input: Option<&InputInfo>) -> Vec<Suggestion> {
        let Some(input) = input else {
            return Vec::new();
        };

        let searcher = self.ctx.searcher(input, self.mode());

        collect_suggestions(
            &searcher,
            self.get_items(),
            |item| item.title.as_str(),
            |item, matched| Suggestion::Starred(ModeSuggestion { item, matched }),
        )
    }

    fn render_suggestion(&self, sugg: Option<&Suggestion>, target: &mut dyn RenderTarget) {
        let Some(Suggestion::Starred(sugg)) = sugg else {
            return;
        };

        target.add_class("qs-starred");
        target.render_results(&sugg.item.title, sugg.matched.as_ref());
    }

    fn on_choose_suggestion(&self, sugg: Option<&Suggestion>, evt: Option<&ChooseEvent>) {
        let Some(Suggestion::Starred(sugg)) = sugg else {
            return;
        };

        let options = OpenOptions {
            new_leaf: evt.is_some_and(|evt| evt.modifier),
        };

        if let Err(err) = self.navigator.open_file(&sugg.item.file, options) {
            error!("quickswitch: unable to open starred file {:?}: {err}", sugg.item.file.path);
        }
    }
}
