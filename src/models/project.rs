//! Project (one championship instance), its settings, and ProjectError.

use crate::models::fixture::{Fixture, MatchId, Round};
use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during project operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProjectError {
    /// A league needs at least 2 teams.
    NotEnoughTeams,
    /// Relegation zone must leave at least one team out of it.
    RelegationCountTooLarge { relegation_count: usize, teams: usize },
    /// Two teams share the same id.
    DuplicateTeamId(TeamId),
    /// A team name is empty after trimming.
    EmptyTeamName,
    /// A project name is empty after trimming.
    EmptyProjectName,
    /// Project has no schedule yet.
    NotConfigured,
    MatchNotFound(MatchId),
    TeamNotFound(TeamId),
    ProjectNotFound(ProjectId),
    /// Exactly one of the two scores was given.
    PartialScore,
    /// Imported data is malformed.
    InvalidProjectData(String),
    /// Serializing a project or table failed.
    Export(String),
}

impl std::fmt::Display for ProjectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectError::NotEnoughTeams => write!(f, "Add at least 2 teams"),
            ProjectError::RelegationCountTooLarge {
                relegation_count,
                teams,
            } => write!(
                f,
                "Relegation count ({}) must be lower than the number of teams ({})",
                relegation_count, teams
            ),
            ProjectError::DuplicateTeamId(id) => write!(f, "Duplicate team id {}", id),
            ProjectError::EmptyTeamName => write!(f, "Team name cannot be empty"),
            ProjectError::EmptyProjectName => write!(f, "Project name cannot be empty"),
            ProjectError::NotConfigured => write!(f, "Project is not configured yet"),
            ProjectError::MatchNotFound(_) => write!(f, "Match not found"),
            ProjectError::TeamNotFound(_) => write!(f, "Team not found"),
            ProjectError::ProjectNotFound(_) => write!(f, "No project"),
            ProjectError::PartialScore => write!(f, "Both scores must be set or both cleared"),
            ProjectError::InvalidProjectData(reason) => write!(f, "Invalid project data: {}", reason),
            ProjectError::Export(reason) => write!(f, "Export failed: {}", reason),
        }
    }
}

impl std::error::Error for ProjectError {}

/// Unique identifier for a project.
pub type ProjectId = Uuid;

/// Default relegation zone size for a new project.
pub const DEFAULT_RELEGATION_COUNT: usize = 4;

/// League rules and team list.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSettings {
    /// Every pair meets twice (home and away).
    pub double_round: bool,
    /// Number of bottom table rows marked as relegation zone.
    pub relegation_count: usize,
    pub teams: Vec<Team>,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            double_round: true,
            relegation_count: DEFAULT_RELEGATION_COUNT,
            teams: Vec::new(),
        }
    }
}

/// A championship: settings plus the schedule with whatever results have been entered.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Creation time, epoch milliseconds.
    pub created_at: i64,
    pub is_configured: bool,
    pub settings: ProjectSettings,
    pub rounds: Vec<Round>,
}

/// Listing view of a project.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: ProjectId,
    pub name: String,
    pub created_at: i64,
    pub is_configured: bool,
    pub teams: usize,
    pub rounds: usize,
}

impl Project {
    /// Create an unconfigured project with default settings.
    pub fn new(name: impl Into<String>) -> Result<Self, ProjectError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(ProjectError::EmptyProjectName);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: chrono::Utc::now().timestamp_millis(),
            is_configured: false,
            settings: ProjectSettings::default(),
            rounds: Vec::new(),
        })
    }

    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            id: self.id,
            name: self.name.clone(),
            created_at: self.created_at,
            is_configured: self.is_configured,
            teams: self.settings.teams.len(),
            rounds: self.rounds.len(),
        }
    }

    pub fn teams(&self) -> &[Team] {
        &self.settings.teams
    }

    /// Round by its 1-based number.
    pub fn round(&self, number: u32) -> Option<&Round> {
        self.rounds.iter().find(|r| r.number == number)
    }

    /// Mutable reference to a fixture anywhere in the schedule.
    pub fn fixture_mut(&mut self, id: MatchId) -> Option<&mut Fixture> {
        self.rounds
            .iter_mut()
            .flat_map(|r| r.matches.iter_mut())
            .find(|m| m.id == id)
    }

    /// All fixtures in round order.
    pub fn fixtures(&self) -> impl Iterator<Item = &Fixture> {
        self.rounds.iter().flat_map(|r| r.matches.iter())
    }
}
