use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Mode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub command_list_command: String,
    pub starred_list_command: String,
    pub workspace_list_command: String,
    pub vault_list_command: String,

    /// Use the substring matcher instead of the fuzzy one.
    pub use_simple_search: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            command_list_command: ">".into(),
            starred_list_command: "'".into(),
            workspace_list_command: "+".into(),
            vault_list_command: "vault ".into(),
            use_simple_search: false,
        }
    }
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// The configured trigger for `mode`, if it has one.
    pub fn trigger(&self, mode: Mode) -> Option<&str> {
        let trigger = match mode {
            Mode::Standard => return None,
            Mode::CommandList => &self.command_list_command,
            Mode::StarredList => &self.starred_list_command,
            Mode::WorkspaceList => &self.workspace_list_command,
            Mode::VaultList => &self.vault_list_command,
        };

        Some(trigger.as_str())
    }
}
