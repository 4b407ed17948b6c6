use std::sync::Arc;

use itertools::Itertools;
use log::error;
use serde::{Deserialize, Serialize};

use crate::handlers::{validation, Handler, HandlerContext};
use crate::host::{VaultChooser, VaultFiles, VaultIpc};
use crate::input::{ChooseEvent, InputInfo, Mode, Validation};
use crate::render::RenderTarget;
use crate::search::{MatchType, PathSegments};
use crate::suggestion::{sort_suggestions, Suggestion, VaultSuggestion};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultItem {
    pub id: String,
    pub segments: PathSegments,
}

/// How vaults are reached on the current platform, chosen once at startup.
#[derive(Clone)]
pub enum VaultAccess {
    /// Vaults are listed and opened through the vault manager process.
    Desktop(Arc<dyn VaultIpc>),

    /// No vault list exists; the host offers its own chooser instead.
    Mobile(Arc<dyn VaultChooser>),
}

pub struct VaultHandler {
    ctx: HandlerContext,
    access: VaultAccess,
    files: Arc<dyn VaultFiles>,
}

impl VaultHandler {
    pub fn new(ctx: HandlerContext, access: VaultAccess, files: Arc<dyn VaultFiles>) -> Self {
        Self { ctx, access, files }
    }

    /// All known vaults ordered by name, then path. Empty on mobile or if the
    /// vault list cannot be retrieved.
    pub fn get_items(&self) -> Vec<VaultItem> {
        let VaultAccess::Desktop(ipc) = &self.access else {
            return Vec::new();
        };

        let vaults = match ipc.vault_list() {
            Ok(vaults) => vaults,
            Err(err) => {
                error!("quickswitch: error retrieving vault list: {err}");
                return Vec::new();
            }
        };

        vaults
            .into_iter()
            .map(|(id, record)| VaultItem {
                id,
                segments: PathSegments::from_path(record.path),
            })
            .sorted_by(|lhs, rhs| {
                lhs.segments.basename
                    .cmp(&rhs.segments.basename)
                    .then_with(|| lhs.segments.path.cmp(&rhs.segments.path))
            })
            .collect()
    }

    fn is_open_vault(&self, path: &str) -> bool {
        self.files.base_path().is_some_and(|base| base == path)
    }
}

impl Handler for VaultHandler {
    fn mode(&self) -> Mode {
        Mode::VaultList
    }

    fn command_string(&self) -> &str {
        self.ctx.trigger(self.mode())
    }

    fn validate_command(&self, index: usize, filter_text: &str) -> Validation {
        validation(self.mode(), index, filter_text, true)
    }

    fn get_suggestions(&self, input: Option<&InputInfo>) -> Vec<Suggestion> {
        let Some(input) = input else {
            return Vec::new();
        };

        if let VaultAccess::Mobile(_) = self.access {
            return vec![Suggestion::VaultChooser];
        }

        let searcher = self.ctx.searcher(input, self.mode());
        let has_search_term = searcher.has_search_term();

        let mut suggestions = Vec::new();
        for item in self.get_items() {
            if self.is_open_vault(&item.segments.path) {
                continue;
            }

            let result = if has_search_term {
                let result = searcher.search_with_fallback("", Some(&item.segments));
                if result.matched.is_none() {
                    continue;
                }

                result
            } else {
                Default::default()
            };

            suggestions.push(Suggestion::Vault(VaultSuggestion {
                item,
                match_type: result.match_type,
                matched: result.matched,
            }));
        }

        if has_search_term {
            sort_suggestions(&mut suggestions);
        }

        suggestions
    }

    fn render_suggestion(&self, sugg: Option<&Suggestion>, target: &mut dyn RenderTarget) {
        match sugg {
            Some(Suggestion::Vault(sugg)) => {
                let (title_match, path_match) = match sugg.match_type {
                    MatchType::Path => (None, sugg.matched.as_ref()),
                    _ => (sugg.matched.as_ref(), None),
                };

                target.add_class("qs-vault");
                target.render_results(&sugg.item.segments.basename, title_match);
                target.render_note(&sugg.item.segments.path, path_match);
            }

            Some(Suggestion::VaultChooser) => {
                target.add_class("qs-vault-chooser");
                target.render_results("Open vault chooser", None);
            }

            _ => {}
        }
    }

    fn on_choose_suggestion(&self, sugg: Option<&Suggestion>, evt: Option<&ChooseEvent>) {
        match (sugg, &self.access) {
            (Some(Suggestion::Vault(sugg)), VaultAccess::Desktop(ipc)) => {
                let new_window = evt.is_some_and(|evt| evt.modifier);
                let path = &sugg.item.segments.path;

                if let Err(err) = ipc.vault_open(path, new_window) {
                    error!("quickswitch: unable to open vault {path:?}: {err}");
                }
            }

            (Some(Suggestion::VaultChooser), VaultAccess::Mobile(chooser)) => {
                chooser.open_vault_chooser();
            }

            _ => {}
        }
    }
}
