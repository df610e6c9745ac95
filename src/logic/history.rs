//! Per-team match history across the schedule.

use crate::models::{MatchId, Outcome, ProjectError, Round, Team, TeamId};
use serde::{Deserialize, Serialize};

/// Shown when a fixture points at a team that is not in the team list.
pub const UNKNOWN_OPPONENT: &str = "Unknown";

/// One fixture of a team, seen from that team's side.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub round_number: u32,
    pub match_id: MatchId,
    pub is_home: bool,
    pub opponent_id: TeamId,
    pub opponent_name: String,
    pub own_score: Option<u32>,
    pub opponent_score: Option<u32>,
    pub outcome: Outcome,
}

/// All fixtures of `team_id` in round order, played or pending.
pub fn team_history(
    teams: &[Team],
    rounds: &[Round],
    team_id: TeamId,
) -> Result<Vec<HistoryEntry>, ProjectError> {
    if !teams.iter().any(|t| t.id == team_id) {
        return Err(ProjectError::TeamNotFound(team_id));
    }

    let history = rounds
        .iter()
        .flat_map(|round| round.matches.iter().map(move |m| (round.number, m)))
        .filter_map(|(round_number, m)| {
            let opponent_id = m.opponent_of(team_id)?;
            let is_home = m.home_team_id == team_id;
            let (own_score, opponent_score) = if is_home {
                (m.home_score, m.away_score)
            } else {
                (m.away_score, m.home_score)
            };
            let opponent_name = teams
                .iter()
                .find(|t| t.id == opponent_id)
                .map(|t| t.name.clone())
                .unwrap_or_else(|| UNKNOWN_OPPONENT.to_string());
            Some(HistoryEntry {
                round_number,
                match_id: m.id,
                is_home,
                opponent_id,
                opponent_name,
                own_score,
                opponent_score,
                outcome: m.outcome_for(team_id),
            })
        })
        .collect();
    Ok(history)
}
