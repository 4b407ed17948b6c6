#![allow(dead_code)]

use std::sync::Arc;

use quickswitch::host::{Command, CorePlugin, HostSnapshot, MemoryHost};
use quickswitch::{HandlerContext, InputInfo, MatchResult, Matcher, Matchers, Mode, ParsedCommand, PreparedMatch, Settings, Validation};

/// Substring matcher with a predictable score: `100 - text length`.
pub struct ContainsMatcher;

impl ContainsMatcher {
    pub fn score_for(text: &str) -> f64 {
        100.0 - text.len() as f64
    }
}

impl Matcher for ContainsMatcher {
    fn prepare(&self, query: &str) -> Option<PreparedMatch> {
        if query.is_empty() {
            return None;
        }

        let query = query.to_owned();
        Some(Box::new(move |text: &str| {
            let start = text.to_lowercase().find(&query)?;
            Some(MatchResult {
                matches: vec![(start, start + query.len())],
                score: ContainsMatcher::score_for(text),
            })
        }))
    }
}

pub fn contains_matchers() -> Arc<Matchers> {
    Arc::new(Matchers::new(Arc::new(ContainsMatcher), Arc::new(ContainsMatcher)))
}

pub fn host(snapshot: HostSnapshot) -> Arc<MemoryHost> {
    Arc::new(MemoryHost::new(snapshot))
}

pub fn all_plugins() -> Vec<CorePlugin> {
    vec![CorePlugin::CommandPalette, CorePlugin::Starred, CorePlugin::Workspaces]
}

pub fn context(host: &Arc<MemoryHost>) -> HandlerContext {
    HandlerContext::new(Arc::new(Settings::default()), contains_matchers(), host.clone())
}

pub fn command(id: &str, name: &str) -> Command {
    Command {
        id: id.into(),
        name: name.into(),
    }
}

/// Input that was validated for `mode` with `filter` as filter text.
pub fn input(mode: Mode, filter: &str) -> InputInfo {
    let mut input = InputInfo::new(filter);
    input.apply(Validation {
        mode,
        command: ParsedCommand {
            index: Some(0),
            parsed_input: filter.into(),
            is_validated: true,
        },
    });

    input
}
