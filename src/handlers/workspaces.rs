use std::sync::Arc;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::handlers::{collect_suggestions, validation, Handler, HandlerContext};
use crate::host::{CorePlugin, Workspaces};
use crate::input::{ChooseEvent, InputInfo, Mode, Validation};
use crate::render::RenderTarget;
use crate::suggestion::{ModeSuggestion, Suggestion};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceItem {
    pub id: String,
}

pub struct WorkspaceHandler {
    ctx: HandlerContext,
    workspaces: Arc<dyn Workspaces>,
}

impl WorkspaceHandler {
    pub fn new(ctx: HandlerContext, workspaces: Arc<dyn Workspaces>) -> Self {
        Self { ctx, workspaces }
    }

    fn is_enabled(&self) -> bool {
        self.ctx.is_enabled(CorePlugin::Workspaces)
    }

    /// Saved workspaces in registry order.
    pub fn get_items(&self) -> Vec<WorkspaceItem> {
        if !self.is_enabled() {
            return Vec::new();
        }

        self.workspaces
            .workspace_ids()
            .into_iter()
            .map(|id| WorkspaceItem { id })
            .collect()
    }
}

impl Handler for WorkspaceHandler {
    fn mode(&self) -> Mode {
        Mode::WorkspaceList
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
            |item| item.id.as_str(),
            |item, matched| Suggestion::Workspace(ModeSuggestion { item, matched }),
        )
    }

    fn render_suggestion(&self, sugg: Option<&Suggestion>, target: &mut dyn RenderTarget) {
        let Some(Suggestion::Workspace(sugg)) = sugg else {
            return;
        };

        target.add_class("qs-workspace");
        target.render_results(&sugg.item.id, sugg.matched.as_ref());
    }

    fn on_choose_suggestion(&self, sugg: Option<&Suggestion>, _evt: Option<&ChooseEvent>) {
        let Some(Suggestion::Workspace(sugg)) = sugg else {
            return;
        };

        if !self.is_enabled() || !self.workspaces.can_load_workspace() {
            warn!("quickswitch: cannot load workspace {:?}, workspaces are unavailable", sugg.item.id);
            return;
        }

        self.workspaces.load_workspace(&sugg.item.id);
    }
}
