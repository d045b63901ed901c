use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A calendar date that has passed both the `YYYY-MM-DD` pattern check and
/// calendar validation. Only constructed by `validation::validate_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchDate(pub(crate) NaiveDate);

impl fmt::Display for MatchDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// A platform username reference such as `@alice`. Opaque to this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerHandle(String);

impl PlayerHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }
}

impl fmt::Display for PlayerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Games won in one set, winner's games first. Serialized as `G-G`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetScore {
    pub winner_games: u32,
    pub loser_games: u32,
}

impl fmt::Display for SetScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.winner_games, self.loser_games)
    }
}

pub type Team = (PlayerHandle, PlayerHandle);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinglesMatch {
    pub winner: PlayerHandle,
    pub loser: PlayerHandle,
    pub sets: Vec<SetScore>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoublesMatch {
    pub winners: Team,
    pub losers: Team,
    pub sets: Vec<SetScore>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchCategory {
    Singles,
    Doubles,
}

impl MatchCategory {
    /// Label consumed by the repository automation that picks up new matches.
    pub fn label(&self) -> &'static str {
        match self {
            MatchCategory::Singles => "new-singles-match",
            MatchCategory::Doubles => "new-doubles-match",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuePayload {
    pub title: String,
    pub body: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedIssue {
    pub number: u64,
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkflowDescriptor {
    pub id: u64,
    pub name: String,
    pub path: String,
}

/// Request body for a workflow dispatch event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchRequest {
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub inputs: HashMap<String, String>,
}
