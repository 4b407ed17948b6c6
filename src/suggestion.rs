use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::handlers::{StarredFile, VaultItem, WorkspaceItem};
use crate::host::Command;
use crate::matchers::MatchResult;
use crate::search::MatchType;
use crate::Mode;

/// A candidate item together with its match against the query.
///
/// `matched` is `None` when the query was empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeSuggestion<T> {
    pub item: T,
    pub matched: Option<MatchResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultSuggestion {
    pub item: VaultItem,
    pub match_type: MatchType,
    pub matched: Option<MatchResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuggestionType {
    Command,
    Starred,
    Workspace,
    Vault,
    VaultChooser,
}

impl SuggestionType {
    /// The mode whose handler produced suggestions of this type.
    pub fn mode(self) -> Mode {
        match self {
            SuggestionType::Command => Mode::CommandList,
            SuggestionType::Starred => Mode::StarredList,
            SuggestionType::Workspace => Mode::WorkspaceList,
            SuggestionType::Vault | SuggestionType::VaultChooser => Mode::VaultList,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Suggestion {
    Command(ModeSuggestion<Command>),
    Starred(ModeSuggestion<StarredFile>),
    Workspace(ModeSuggestion<WorkspaceItem>),
    Vault(VaultSuggestion),

    /// Stand-in on platforms without a vault list: choosing it opens the
    /// host's vault chooser.
    VaultChooser,
}

impl Suggestion {
    pub fn kind(&self) -> SuggestionType {
        match self {
            Suggestion::Command(_) => SuggestionType::Command,
            Suggestion::Starred(_) => SuggestionType::Starred,
            Suggestion::Workspace(_) => SuggestionType::Workspace,
            Suggestion::Vault(_) => SuggestionType::Vault,
            Suggestion::VaultChooser => SuggestionType::VaultChooser,
        }
    }

    pub fn matched(&self) -> Option<&MatchResult> {
        match self {
            Suggestion::Command(sugg) => sugg.matched.as_ref(),
            Suggestion::Starred(sugg) => sugg.matched.as_ref(),
            Suggestion::Workspace(sugg) => sugg.matched.as_ref(),
            Suggestion::Vault(sugg) => sugg.matched.as_ref(),
            Suggestion::VaultChooser => None,
        }
    }

    pub fn score(&self) -> Option<f64> {
        self.matched().map(|m| m.score)
    }
}

/// Stable sort by score, best first. Unscored suggestions go last.
pub fn sort_suggestions(suggestions: &mut [Suggestion]) {
    suggestions.sort_by(|lhs, rhs| compare_scores(rhs.score(), lhs.score()));
}

fn compare_scores(lhs: Option<f64>, rhs: Option<f64>) -> Ordering {
    lhs.unwrap_or(f64::NEG_INFINITY)
        .total_cmp(&rhs.unwrap_or(f64::NEG_INFINITY))
}
