//! Data structures for the league: teams, fixtures, rounds, standings, projects.

mod fixture;
mod project;
mod standings;
mod team;

pub use fixture::{Fixture, MatchId, Outcome, Round};
pub use project::{
    Project, ProjectError, ProjectId, ProjectSettings, ProjectSummary, DEFAULT_RELEGATION_COUNT,
};
pub use standings::{StandingsRow, TableRow, POINTS_FOR_DRAW, POINTS_FOR_WIN};
pub use team::{Team, TeamId};
