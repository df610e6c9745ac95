//! StandingsRow and the annotated TableRow.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

/// Points for a win.
pub const POINTS_FOR_WIN: u32 = 3;
/// Points for a draw.
pub const POINTS_FOR_DRAW: u32 = 1;

/// Aggregate statistics for one team. Derived from fixtures on every call, never stored.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    pub team_id: TeamId,
    pub team_name: String,
    pub played: u32,
    pub points: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    /// Summed across matches, so wider than a single score.
    pub goals_for: u64,
    pub goals_against: u64,
    pub goal_difference: i64,
}

impl StandingsRow {
    /// Zeroed row for a team.
    pub fn new(team_id: TeamId, team_name: impl Into<String>) -> Self {
        Self {
            team_id,
            team_name: team_name.into(),
            played: 0,
            points: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
        }
    }

    /// Share of available points won, in percent. 0 when nothing has been played.
    pub fn efficiency(&self) -> f64 {
        if self.played == 0 {
            return 0.0;
        }
        f64::from(self.points) / (f64::from(self.played) * f64::from(POINTS_FOR_WIN)) * 100.0
    }

    pub(crate) fn record(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.goals_for += u64::from(scored);
        self.goals_against += u64::from(conceded);
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => {
                self.won += 1;
                self.points += POINTS_FOR_WIN;
            }
            std::cmp::Ordering::Equal => {
                self.drawn += 1;
                self.points += POINTS_FOR_DRAW;
            }
            std::cmp::Ordering::Less => self.lost += 1,
        }
    }

    pub(crate) fn update_goal_difference(&mut self) {
        let goals_for = i64::try_from(self.goals_for).unwrap_or(i64::MAX);
        let goals_against = i64::try_from(self.goals_against).unwrap_or(i64::MAX);
        self.goal_difference = goals_for - goals_against;
    }
}

/// A standings row with its position and zone annotations (for display).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// 1-based.
    pub position: usize,
    pub leader: bool,
    pub relegation: bool,
    pub efficiency: f64,
    #[serde(flatten)]
    pub row: StandingsRow,
}
