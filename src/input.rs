use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// The suggestion source that is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Standard,
    CommandList,
    StarredList,
    WorkspaceList,
    VaultList,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Standard => "standard",
            Mode::CommandList => "commands",
            Mode::StarredList => "starred",
            Mode::WorkspaceList => "workspaces",
            Mode::VaultList => "vaults",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Mode::Standard,
            Mode::CommandList,
            Mode::StarredList,
            Mode::WorkspaceList,
            Mode::VaultList,
        ]
        .into_iter()
        .find(|mode| mode.name().eq_ignore_ascii_case(s))
        .ok_or_else(|| Error::UnknownMode(s.to_owned()))
    }
}

/// How a mode's trigger was recognized in the raw input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Position of the trigger in the raw input.
    pub index: Option<usize>,

    /// The filter text following the trigger.
    pub parsed_input: String,
    pub is_validated: bool,
}

/// Result of asking a handler whether its mode applies to the current input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub mode: Mode,
    pub command: ParsedCommand,
}

impl Validation {
    pub fn is_validated(&self) -> bool {
        self.command.is_validated
    }
}

/// Per-keystroke input state owned by the dispatcher.
#[derive(Debug, Clone, Default)]
pub struct InputInfo {
    pub input_text: String,
    pub mode: Mode,
    parsed_commands: HashMap<Mode, ParsedCommand>,
}

impl InputInfo {
    pub fn new(input_text: impl Into<String>) -> Self {
        Self {
            input_text: input_text.into(),
            ..Self::default()
        }
    }

    /// Merges a validation result. Only validated results are stored, and
    /// they switch the input to their mode.
    pub fn apply(&mut self, validation: Validation) {
        if !validation.is_validated() {
            return;
        }

        self.mode = validation.mode;
        self.parsed_commands.insert(validation.mode, validation.command);
    }

    pub fn parsed_command(&self, mode: Mode) -> Option<&ParsedCommand> {
        self.parsed_commands.get(&mode)
    }

    /// The filter text for `mode`, empty if the mode was never validated.
    pub fn filter_text(&self, mode: Mode) -> &str {
        self.parsed_command(mode)
            .map(|cmd| cmd.parsed_input.as_str())
            .unwrap_or_default()
    }
}

/// Details of the user interaction that chose a suggestion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChooseEvent {
    /// The platform modifier key was held, e.g. to open in a new pane.
    pub modifier: bool,
}
