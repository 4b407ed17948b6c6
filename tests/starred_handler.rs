use std::sync::Arc;

use quickswitch::host::{CorePlugin, FileRef, HostEvent, HostSnapshot, MemoryHost, StarredItem};
use quickswitch::render::MarkedText;
use quickswitch::{ChooseEvent, Handler, Mode, StarredHandler, Suggestion};

mod common;

use common::{context, host, input};

fn starred_file(path: &str, title: &str) -> StarredItem {
    StarredItem::File {
        path: path.into(),
        title: title.into(),
    }
}

fn snapshot() -> HostSnapshot {
    HostSnapshot {
        enabled_plugins: vec![CorePlugin::Starred],
        files: vec!["notes/alpha.md".into(), "notes/beta.md".into(), "projects/gamma.md".into()],
        starred: vec![
            starred_file("notes/beta.md", "beta"),
            StarredItem::Search {
                query: "tag:#todo".into(),
                title: "todos".into(),
            },
            starred_file("projects/gamma.md", "gamma"),
            starred_file("notes/alpha.md", "alpha"),
        ],
        ..Default::default()
    }
}

fn handler(snapshot: HostSnapshot) -> (StarredHandler, Arc<MemoryHost>) {
    let host = host(snapshot);
    let handler = StarredHandler::new(context(&host), host.clone(), host.clone(), host.clone());
    (handler, host)
}

fn titles(handler: &StarredHandler) -> Vec<String> {
    handler.get_items().into_iter().map(|item| item.title).collect()
}

#[test]
fn lists_starred_files_in_starred_order() {
    let (handler, _) = handler(snapshot());

    assert_eq!(titles(&handler), vec!["beta", "gamma", "alpha"]);
    assert_eq!(handler.get_items()[1].file, FileRef::new("projects/gamma.md"));
}

#[test]
fn deleted_files_are_dropped() {
    let (handler, host) = handler(snapshot());
    host.update(|state| state.files.retain(|path| path != "projects/gamma.md"));

    assert_eq!(titles(&handler), vec!["beta", "alpha"]);
}

#[test]
fn renamed_files_report_their_current_name() {
    let mut snapshot = snapshot();
    snapshot.files.push("notes/renamed.md".into());
    snapshot.starred = vec![starred_file("notes/renamed.md", "old title")];

    let (handler, _) = handler(snapshot);
    assert_eq!(titles(&handler), vec!["renamed"]);
}

#[test]
fn disabled_plugin_yields_no_items_and_no_validation() {
    let mut snapshot = snapshot();
    snapshot.enabled_plugins.clear();

    let (handler, _) = handler(snapshot);

    assert!(handler.get_items().is_empty());

    let validation = handler.validate_command(0, "alpha");
    assert!(!validation.is_validated());
    assert_eq!(validation.command.parsed_input, "");
}

#[test]
fn enabled_plugin_validates() {
    let (handler, _) = handler(snapshot());
    let validation = handler.validate_command(2, "al");

    assert!(validation.is_validated());
    assert_eq!(validation.mode, Mode::StarredList);
    assert_eq!(validation.command.index, Some(2));
}

#[test]
fn get_items_is_repeatable() {
    let (handler, _) = handler(snapshot());
    assert_eq!(handler.get_items(), handler.get_items());
}

#[test]
fn search_matches_current_title() {
    let (handler, _) = handler(snapshot());

    let suggestions = handler.get_suggestions(Some(&input(Mode::StarredList, "ALP")));
    assert_eq!(suggestions.len(), 1);

    let mut target = MarkedText::default();
    handler.render_suggestion(suggestions.first(), &mut target);

    assert_eq!(target.classes, vec!["qs-starred"]);
    assert_eq!(target.to_string(), "[alp]ha");
}

#[test]
fn empty_query_keeps_starred_order() {
    let (handler, _) = handler(snapshot());
    let suggestions = handler.get_suggestions(Some(&input(Mode::StarredList, "")));

    let titles: Vec<_> = suggestions
        .iter()
        .map(|sugg| match sugg {
            Suggestion::Starred(sugg) => {
                assert!(sugg.matched.is_none());
                sugg.item.title.as_str()
            }
            other => panic!("unexpected suggestion {other:?}"),
        })
        .collect();

    assert_eq!(titles, vec!["beta", "gamma", "alpha"]);
}

#[test]
fn choosing_opens_the_file() {
    let (handler, host) = handler(snapshot());
    let suggestions = handler.get_suggestions(Some(&input(Mode::StarredList, "gamma")));

    handler.on_choose_suggestion(suggestions.first(), Some(&ChooseEvent { modifier: true }));
    handler.on_choose_suggestion(None, None);

    assert_eq!(
        host.events(),
        vec![HostEvent::FileOpened {
            path: "projects/gamma.md".into(),
            new_leaf: true,
        }],
    );
}

#[test]
fn failed_open_is_swallowed() {
    let (handler, host) = handler(snapshot());
    let suggestions = handler.get_suggestions(Some(&input(Mode::StarredList, "beta")));

    // the file disappears between listing and choosing
    host.update(|state| state.files.clear());
    handler.on_choose_suggestion(suggestions.first(), None);

    assert!(host.events().is_empty());
}

#[test]
fn missing_input_yields_nothing() {
    let (handler, _) = handler(snapshot());
    assert!(handler.get_suggestions(None).is_empty());
}
