use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use itertools::Itertools;

use quickswitch::host::{HostSnapshot, MemoryHost};
use quickswitch::render::MarkedText;
use quickswitch::{
    ChooseEvent, CommandHandler, HandlerContext, Handlers, InputInfo, Matchers, Mode, Settings, StarredHandler,
    VaultAccess, VaultHandler, WorkspaceHandler,
};

const USAGE: &str = "usage: quickswitch [--mobile] [--choose] <host.json> <mode> [filter...]";

struct Args {
    mobile: bool,
    choose: bool,
    snapshot: String,
    mode: Mode,
    filter: String,
}

fn parse_args() -> Result<Args> {
    let (flags, positional): (Vec<String>, Vec<String>) = std::env::args()
        .skip(1)
        .partition(|arg| arg.starts_with("--"));

    if let Some(flag) = flags.iter().find(|flag| !matches!(flag.as_str(), "--mobile" | "--choose")) {
        bail!("unknown flag {flag}\n{USAGE}");
    }

    let mut positional = positional.into_iter();
    let snapshot = positional.next().context(USAGE)?;
    let mode = positional.next().context(USAGE)?.parse()?;

    Ok(Args {
        mobile: flags.iter().any(|flag| flag == "--mobile"),
        choose: flags.iter().any(|flag| flag == "--choose"),
        snapshot,
        mode,
        filter: positional.join(" "),
    })
}

fn load_settings() -> Result<Settings> {
    match std::env::var_os("QUICKSWITCH_SETTINGS") {
        Some(path) => Settings::load(&path).with_context(|| format!("loading settings from {path:?}")),
        None => Ok(Settings::default()),
    }
}

fn load_host(path: &str) -> Result<MemoryHost> {
    let reader = BufReader::new(File::open(path).with_context(|| format!("opening {path}"))?);
    let snapshot: HostSnapshot = serde_json::from_reader(reader)?;
    Ok(MemoryHost::new(snapshot))
}

fn create_handlers(settings: Settings, host: &Arc<MemoryHost>, mobile: bool) -> Handlers {
    let ctx = HandlerContext::new(Arc::new(settings), Arc::new(Matchers::default()), host.clone());

    let vault_access = if mobile {
        VaultAccess::Mobile(host.clone())
    } else {
        VaultAccess::Desktop(host.clone())
    };

    let mut handlers = Handlers::new();
    handlers.register(Box::new(CommandHandler::new(ctx.clone(), host.clone(), host.clone())));
    handlers.register(Box::new(StarredHandler::new(ctx.clone(), host.clone(), host.clone(), host.clone())));
    handlers.register(Box::new(WorkspaceHandler::new(ctx.clone(), host.clone())));
    handlers.register(Box::new(VaultHandler::new(ctx, vault_access, host.clone())));
    handlers
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args()?;
    let host = Arc::new(load_host(&args.snapshot)?);
    let handlers = create_handlers(load_settings()?, &host, args.mobile);

    let Some(handler) = handlers.get(args.mode) else {
        bail!("no handler for mode {}", args.mode);
    };

    let trigger = handler.command_string().to_owned();
    let mut input = InputInfo::new(format!("{trigger}{}", args.filter));

    if !handlers.validate(&mut input, args.mode, 0, &args.filter) {
        bail!("mode {} is not available", args.mode);
    }

    let suggestions = handlers.get_suggestions(&input);
    for sugg in &suggestions {
        let mut text = MarkedText::default();
        handlers.render_suggestion(sugg, &mut text);
        println!("{text}");
    }

    if args.choose {
        if let Some(sugg) = suggestions.first() {
            handlers.choose_suggestion(sugg, Some(&ChooseEvent::default()));
        }

        for event in host.events() {
            println!("-> {event:?}");
        }
    }

    Ok(())
}
