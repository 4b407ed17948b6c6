//! Interfaces to the application hosting the switcher.
//!
//! Every collaborator is a small capability trait so handlers can be wired to
//! the real application or to [`MemoryHost`] in tests.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use memory::{HostEvent, HostSnapshot, MemoryHost};

mod memory;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("inter-process request failed: {0}")]
    Ipc(String),

    #[error("file not found: {0}")]
    FileNotFound(String),
}

/// Built-in host plugins some modes depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CorePlugin {
    CommandPalette,
    Starred,
    Workspaces,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub id: String,
    pub name: String,
}

/// A file inside the host vault, identified by its vault relative path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileRef {
    pub path: String,
}

impl FileRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// File name including its extension.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// File name without its extension.
    pub fn basename(&self) -> &str {
        let name = self.name();
        match name.rfind('.') {
            Some(pos) if pos > 0 => &name[..pos],
            _ => name,
        }
    }
}

/// A persisted entry of the host's starred list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StarredItem {
    File { path: String, title: String },
    Search { query: String, title: String },
}

/// One entry of the `vault-list` reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultRecord {
    pub path: String,
    pub ts: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpenOptions {
    pub new_leaf: bool,
}

pub trait PluginRegistry: Send + Sync {
    fn is_enabled(&self, plugin: CorePlugin) -> bool;
}

pub trait CommandRegistry: Send + Sync {
    /// All commands currently registered, in registration order.
    fn commands(&self) -> Vec<Command>;

    /// Returns `false` if no command with this id could be run.
    fn execute_command_by_id(&self, id: &str) -> bool;
}

pub trait PinnedCommands: Send + Sync {
    /// The pinned command ids, or `None` if pinning is unavailable.
    fn pinned_command_ids(&self) -> Option<Vec<String>>;
}

pub trait StarredItems: Send + Sync {
    fn starred_items(&self) -> Vec<StarredItem>;
}

pub trait VaultFiles: Send + Sync {
    fn file_by_path(&self, path: &str) -> Option<FileRef>;

    /// Filesystem location of the vault that is currently open.
    fn base_path(&self) -> Option<String>;
}

pub trait Navigator: Send + Sync {
    fn open_file(&self, file: &FileRef, options: OpenOptions) -> Result<(), HostError>;
}

pub trait Workspaces: Send + Sync {
    /// Names of all saved workspaces.
    fn workspace_ids(&self) -> Vec<String>;

    /// Whether [`Workspaces::load_workspace`] is available.
    fn can_load_workspace(&self) -> bool;

    fn load_workspace(&self, id: &str);
}

/// The synchronous request/response channel to the vault manager process.
pub trait VaultIpc: Send + Sync {
    /// `vault-list`: vault id to vault record.
    fn vault_list(&self) -> Result<HashMap<String, VaultRecord>, HostError>;

    /// `vault-open`: switches to the vault at `path`.
    fn vault_open(&self, path: &str, new_window: bool) -> Result<(), HostError>;
}

pub trait VaultChooser: Send + Sync {
    fn open_vault_chooser(&self);
}
