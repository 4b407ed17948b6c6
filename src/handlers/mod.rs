use std::collections::BTreeMap;
use std::sync::Arc;

pub use commands::CommandHandler;
pub use starred::{StarredFile, StarredHandler};
pub use vaults::{VaultAccess, VaultHandler, VaultItem};
pub use workspaces::{WorkspaceHandler, WorkspaceItem};

use crate::host::{CorePlugin, PluginRegistry};
use crate::input::{ChooseEvent, InputInfo, Mode, ParsedCommand, Validation};
use crate::matchers::{MatchResult, Matchers};
use crate::render::RenderTarget;
use crate::search::StringSearcher;
use crate::settings::Settings;
use crate::suggestion::{sort_suggestions, Suggestion};

mod commands;
mod starred;
mod vaults;
mod workspaces;

/// One suggestion source of the switcher.
///
/// Every entry point accepts a missing argument and turns it into a no-op,
/// and none of them report errors: failures of the host are logged and
/// result in fewer suggestions.
pub trait Handler: Send + Sync {
    fn mode(&self) -> Mode;

    /// The trigger that switches the input to this handler's mode.
    fn command_string(&self) -> &str;

    /// Decides whether this mode applies, given the trigger found at `index`
    /// and the text following it.
    fn validate_command(&self, index: usize, filter_text: &str) -> Validation;

    fn get_suggestions(&self, input: Option<&InputInfo>) -> Vec<Suggestion>;

    fn render_suggestion(&self, sugg: Option<&Suggestion>, target: &mut dyn RenderTarget);

    fn on_choose_suggestion(&self, sugg: Option<&Suggestion>, evt: Option<&ChooseEvent>);
}

/// What all handlers share: settings, match delegates and the plugin registry.
#[derive(Clone)]
pub struct HandlerContext {
    pub settings: Arc<Settings>,
    pub matchers: Arc<Matchers>,
    pub plugins: Arc<dyn PluginRegistry>,
}

impl HandlerContext {
    pub fn new(settings: Arc<Settings>, matchers: Arc<Matchers>, plugins: Arc<dyn PluginRegistry>) -> Self {
        Self { settings, matchers, plugins }
    }

    pub fn is_enabled(&self, plugin: CorePlugin) -> bool {
        self.plugins.is_enabled(plugin)
    }

    pub fn trigger(&self, mode: Mode) -> &str {
        self.settings.trigger(mode).unwrap_or_default()
    }

    /// A searcher over the filter text `input` holds for `mode`.
    pub fn searcher(&self, input: &InputInfo, mode: Mode) -> StringSearcher {
        StringSearcher::create(
            Some(input.filter_text(mode)),
            self.settings.use_simple_search,
            Arc::clone(&self.matchers),
        )
    }
}

fn validation(mode: Mode, index: usize, filter_text: &str, is_validated: bool) -> Validation {
    let command = if is_validated {
        ParsedCommand {
            index: Some(index),
            parsed_input: filter_text.to_owned(),
            is_validated: true,
        }
    } else {
        ParsedCommand::default()
    };

    Validation { mode, command }
}

/// Matches every item against `searcher`, dropping non-matches, and sorts by
/// score. With an empty query all items are kept unscored, in their original
/// order.
fn collect_suggestions<T>(
    searcher: &StringSearcher,
    items: Vec<T>,
    text: impl Fn(&T) -> &str,
    suggestion: impl Fn(T, Option<MatchResult>) -> Suggestion,
) -> Vec<Suggestion> {
    if !searcher.has_search_term() {
        return items.into_iter().map(|item| suggestion(item, None)).collect();
    }

    let mut suggestions: Vec<_> = items
        .into_iter()
        .filter_map(|item| {
            let matched = searcher.execute_search(text(&item))?;
            Some(suggestion(item, Some(matched)))
        })
        .collect();

    sort_suggestions(&mut suggestions);
    suggestions
}

/// Dispatch table from mode to handler.
#[derive(Default)]
pub struct Handlers {
    table: BTreeMap<Mode, Box<dyn Handler>>,
}

impl Handlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for its mode, replacing any previous one.
    pub fn register(&mut self, handler: Box<dyn Handler>) {
        self.table.insert(handler.mode(), handler);
    }

    pub fn get(&self, mode: Mode) -> Option<&dyn Handler> {
        self.table.get(&mode).map(|handler| handler.as_ref())
    }

    pub fn modes(&self) -> impl Iterator<Item = Mode> + '_ {
        self.table.keys().copied()
    }

    /// Asks the handler of `mode` to validate and merges the result into `input`.
    /// Returns whether the input is now in `mode`.
    pub fn validate(&self, input: &mut InputInfo, mode: Mode, index: usize, filter_text: &str) -> bool {
        let Some(handler) = self.get(mode) else {
            return false;
        };

        let validation = handler.validate_command(index, filter_text);
        let validated = validation.is_validated();
        input.apply(validation);

        validated
    }

    /// Suggestions of the handler for the input's current mode.
    pub fn get_suggestions(&self, input: &InputInfo) -> Vec<Suggestion> {
        self.get(input.mode)
            .map(|handler| handler.get_suggestions(Some(input)))
            .unwrap_or_default()
    }

    pub fn render_suggestion(&self, sugg: &Suggestion, target: &mut dyn RenderTarget) {
        if let Some(handler) = self.get(sugg.kind().mode()) {
            handler.render_suggestion(Some(sugg), target);
        }
    }

    pub fn choose_suggestion(&self, sugg: &Suggestion, evt: Option<&ChooseEvent>) {
        if let Some(handler) = self.get(sugg.kind().mode()) {
            handler.on_choose_suggestion(Some(sugg), evt);
        }
    }
}
