use std::sync::Arc;

use log::debug;

use crate::handlers::{collect_suggestions, validation, Handler, HandlerContext};
use crate::host::{Command, CommandRegistry, CorePlugin, PinnedCommands};
use crate::input::{ChooseEvent, InputInfo, Mode, Validation};
use crate::render::RenderTarget;
use crate::suggestion::{ModeSuggestion, Suggestion};

/// Lists and runs the host's commands.
pub struct CommandHandler {
    ctx: HandlerContext,
    commands: Arc<dyn CommandRegistry>,
    pinned: Arc<dyn PinnedCommands>,
}

impl CommandHandler {
    pub fn new(ctx: HandlerContext, commands: Arc<dyn CommandRegistry>, pinned: Arc<dyn PinnedCommands>) -> Self {
        Self { ctx, commands, pinned }
    }

    /// All commands sorted by name, with pinned commands moved to the front
    /// in their pinned order.
    pub fn get_items(&self) -> Vec<Command> {
        let mut commands = self.commands.commands();

        // by default we sort all commands by display name
        commands.sort_by(|lhs, rhs| lhs.name.cmp(&rhs.name));

        for id in self.pinned_ids().iter().rev() {
            if let Some(pos) = commands.iter().position(|cmd| &cmd.id == id) {
                let cmd = commands.remove(pos);
                commands.insert(0, cmd);
            }
        }

        commands
    }

    fn pinned_ids(&self) -> Vec<String> {
        if !self.ctx.is_enabled(CorePlugin::CommandPalette) {
            return Vec::new();
        }

        self.pinned.pinned_command_ids().unwrap_or_default()
    }
}

impl Handler for CommandHandler {
    fn mode(&self) -> Mode {
        Mode::CommandList
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

        let searcher = self.ctx.searcher(input, self.mode());

        collect_suggestions(
            &searcher,
            self.get_items(),
            |cmd| cmd.name.as_str(),
            |item, matched| Suggestion::Command(ModeSuggestion { item, matched }),
        )
    }

    fn render_suggestion(&self, sugg: Option<&Suggestion>, target: &mut dyn RenderTarget) {
        let Some(Suggestion::Command(sugg)) = sugg else {
            return;
        };

        target.add_class("qs-command");
        target.render_results(&sugg.item.name, sugg.matched.as_ref());
    }

    fn on_choose_suggestion(&self, sugg: Option<&Suggestion>, _evt: Option<&ChooseEvent>) {
        let Some(Suggestion::Command(sugg)) = sugg else {
            return;
        };

        if !self.commands.execute_command_by_id(&sugg.item.id) {
            debug!("quickswitch: command {:?} did not run", sugg.item.id);
        }
    }
}
