use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::host::{
    Command, CommandRegistry, CorePlugin, FileRef, HostError, Navigator, OpenOptions, PinnedCommands,
    PluginRegistry, StarredItem, StarredItems, VaultChooser, VaultFiles, VaultIpc, VaultRecord, Workspaces,
};

/// Serializable state of a [`MemoryHost`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSnapshot {
    pub commands: Vec<Command>,

    /// `None` when command pinning is not available.
    pub pinned_commands: Option<Vec<String>>,
    pub enabled_plugins: Vec<CorePlugin>,
    pub starred: Vec<StarredItem>,

    /// Vault relative paths of all files.
    pub files: Vec<String>,
    pub workspaces: Vec<String>,
    pub workspace_loader_missing: bool,
    pub vaults: HashMap<String, VaultRecord>,

    /// When set, `vault-list` requests fail with this message.
    pub vault_list_error: Option<String>,
    pub base_path: Option<String>,
}

/// Side effects the host was asked to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    CommandExecuted(String),
    FileOpened { path: String, new_leaf: bool },
    WorkspaceLoaded(String),
    VaultOpened { path: String, new_window: bool },
    VaultChooserOpened,
}

/// A host that keeps all of its state in memory.
#[derive(Default)]
pub struct MemoryHost {
    state: Mutex<HostSnapshot>,
    events: Mutex<Vec<HostEvent>>,
}

impl MemoryHost {
    pub fn new(snapshot: HostSnapshot) -> Self {
        Self {
            state: Mutex::new(snapshot),
            events: Mutex::default(),
        }
    }

    /// Mutates the live state, e.g. to rename or delete a file.
    pub fn update(&self, f: impl FnOnce(&mut HostSnapshot)) {
        f(&mut self.state());
    }

    pub fn events(&self) -> Vec<HostEvent> {
        lock(&self.events).clone()
    }

    fn state(&self) -> MutexGuard<'_, HostSnapshot> {
        lock(&self.state)
    }

    fn record(&self, event: HostEvent) {
        lock(&self.events).push(event);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl PluginRegistry for MemoryHost {
    fn is_enabled(&self, plugin: CorePlugin) -> bool {
        self.state().enabled_plugins.contains(&plugin)
    }
}

impl CommandRegistry for MemoryHost {
    fn commands(&self) -> Vec<Command> {
        self.state().commands.clone()
    }

    fn execute_command_by_id(&self, id: &str) -> bool {
        let known = self.state().commands.iter().any(|cmd| cmd.id == id);
        if known {
            self.record(HostEvent::CommandExecuted(id.to_owned()));
        }

        known
    }
}

impl PinnedCommands for MemoryHost {
    fn pinned_command_ids(&self) -> Option<Vec<String>> {
        self.state().pinned_commands.clone()
    }
}

impl StarredItems for MemoryHost {
    fn starred_items(&self) -> Vec<StarredItem> {
        self.state().starred.clone()
    }
}

impl VaultFiles for MemoryHost {
    fn file_by_path(&self, path: &str) -> Option<FileRef> {
        self.state()
            .files
            .iter()
            .find(|candidate| *candidate == path)
            .map(FileRef::new)
    }

    fn base_path(&self) -> Option<String> {
        self.state().base_path.clone()
    }
}

impl Navigator for MemoryHost {
    fn open_file(&self, file: &FileRef, options: OpenOptions) -> Result<(), HostError> {
        if self.file_by_path(&file.path).is_none() {
            return Err(HostError::FileNotFound(file.path.clone()));
        }

        self.record(HostEvent::FileOpened {
            path: file.path.clone(),
            new_leaf: options.new_leaf,
        });

        Ok(())
    }
}

impl Workspaces for MemoryHost {
    fn workspace_ids(&self) -> Vec<String> {
        self.state().workspaces.clone()
    }

    fn can_load_workspace(&self) -> bool {
        !self.state().workspace_loader_missing
    }

    fn load_workspace(&self, id: &str) {
        self.record(HostEvent::WorkspaceLoaded(id.to_owned()));
    }
}

impl VaultIpc for MemoryHost {
    fn vault_list(&self) -> Result<HashMap<String, VaultRecord>, HostError> {
        let state = self.state();
        match &state.vault_list_error {
            Some(message) => Err(HostError::Ipc(message.clone())),
            None => Ok(state.vaults.clone()),
        }
    }

    fn vault_open(&self, path: &str, new_window: bool) -> Result<(), HostError> {
        self.record(HostEvent::VaultOpened {
            path: path.to_owned(),
            new_window,
        });

        Ok(())
    }
}

impl VaultChooser for MemoryHost {
    fn open_vault_chooser(&self) {
        self.record(HostEvent::VaultChooserOpened);
    }
}
