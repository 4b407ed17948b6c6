use std::sync::Arc;

use quickswitch::host::{CorePlugin, HostEvent, HostSnapshot, MemoryHost, StarredItem};
use quickswitch::render::{LayoutJobTarget, MarkedText};
use quickswitch::{
    CommandHandler, Handlers, InputInfo, Mode, StarredHandler, SuggestionType, VaultAccess, VaultHandler,
    WorkspaceHandler,
};

mod common;

use common::{command, context};

fn setup(enabled_plugins: Vec<CorePlugin>) -> (Handlers, Arc<MemoryHost>) {
    let host = Arc::new(MemoryHost::new(HostSnapshot {
        commands: vec![command("editor:save", "Save file"), command("app:quit", "Quit")],
        enabled_plugins,
        files: vec!["inbox.md".into()],
        starred: vec![StarredItem::File {
            path: "inbox.md".into(),
            title: "Inbox".into(),
        }],
        workspaces: vec!["Default".into()],
        ..Default::default()
    }));

    let ctx = context(&host);
    let mut handlers = Handlers::new();
    handlers.register(Box::new(CommandHandler::new(ctx.clone(), host.clone(), host.clone())));
    handlers.register(Box::new(StarredHandler::new(ctx.clone(), host.clone(), host.clone(), host.clone())));
    handlers.register(Box::new(WorkspaceHandler::new(ctx.clone(), host.clone())));
    handlers.register(Box::new(VaultHandler::new(ctx, VaultAccess::Desktop(host.clone()), host.clone())));

    (handlers, host)
}

#[test]
fn every_mode_has_a_handler() {
    let (handlers, _) = setup(common::all_plugins());

    let modes: Vec<_> = handlers.modes().collect();
    assert_eq!(
        modes,
        vec![Mode::CommandList, Mode::StarredList, Mode::WorkspaceList, Mode::VaultList],
    );
    assert!(handlers.get(Mode::Standard).is_none());
}

#[test]
fn validation_switches_the_input_mode() {
    let (handlers, _) = setup(common::all_plugins());
    let mut input = InputInfo::new(">save");

    assert!(handlers.validate(&mut input, Mode::CommandList, 0, "save"));
    assert_eq!(input.mode, Mode::CommandList);

    let suggestions = handlers.get_suggestions(&input);
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].kind(), SuggestionType::Command);
}

#[test]
fn gated_mode_stays_standard() {
    let (handlers, _) = setup(Vec::new());
    let mut input = InputInfo::new("'inbox");

    assert!(!handlers.validate(&mut input, Mode::StarredList, 0, "inbox"));
    assert_eq!(input.mode, Mode::Standard);
    assert!(input.parsed_command(Mode::StarredList).is_none());
    assert!(handlers.get_suggestions(&input).is_empty());
}

#[test]
fn suggestions_are_routed_back_to_their_handler() {
    let (handlers, host) = setup(common::all_plugins());

    let mut input = InputInfo::new("'");
    handlers.validate(&mut input, Mode::StarredList, 0, "");

    let suggestions = handlers.get_suggestions(&input);
    assert_eq!(suggestions.len(), 1);

    let mut text = MarkedText::default();
    handlers.render_suggestion(&suggestions[0], &mut text);
    assert_eq!(text.title, "inbox");

    let mut job = LayoutJobTarget::default();
    handlers.render_suggestion(&suggestions[0], &mut job);
    assert_eq!(job.job.text, "inbox");
    assert_eq!(job.classes, vec!["qs-starred"]);

    handlers.choose_suggestion(&suggestions[0], None);
    assert_eq!(
        host.events(),
        vec![HostEvent::FileOpened {
            path: "inbox.md".into(),
            new_leaf: false,
        }],
    );
}

#[test]
fn unknown_mode_is_not_validated() {
    let (handlers, _) = setup(common::all_plugins());
    let mut input = InputInfo::new("");

    assert!(!handlers.validate(&mut input, Mode::Standard, 0, ""));
    assert!(handlers.get_suggestions(&input).is_empty());
}
