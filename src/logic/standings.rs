//! Standings: fold played fixtures into per-team rows, rank them, annotate zones.

use crate::models::{ProjectError, Round, StandingsRow, TableRow, Team, TeamId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Column a table can be sorted by.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Points,
    Played,
    Won,
    Drawn,
    Lost,
    GoalsFor,
    GoalsAgainst,
    GoalDifference,
    Efficiency,
    Name,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Ranking precedence: points, wins, goal difference, goals for, then name.
const RANKING: [(SortKey, SortDirection); 5] = [
    (SortKey::Points, SortDirection::Desc),
    (SortKey::Won, SortDirection::Desc),
    (SortKey::GoalDifference, SortDirection::Desc),
    (SortKey::GoalsFor, SortDirection::Desc),
    (SortKey::Name, SortDirection::Asc),
];

impl SortKey {
    /// Direction used when none is requested: names ascending, numbers descending.
    pub fn default_direction(self) -> SortDirection {
        match self {
            SortKey::Name => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }

    /// Ascending comparison on this column.
    fn compare(self, a: &StandingsRow, b: &StandingsRow) -> Ordering {
        match self {
            SortKey::Points => a.points.cmp(&b.points),
            SortKey::Played => a.played.cmp(&b.played),
            SortKey::Won => a.won.cmp(&b.won),
            SortKey::Drawn => a.drawn.cmp(&b.drawn),
            SortKey::Lost => a.lost.cmp(&b.lost),
            SortKey::GoalsFor => a.goals_for.cmp(&b.goals_for),
            SortKey::GoalsAgainst => a.goals_against.cmp(&b.goals_against),
            SortKey::GoalDifference => a.goal_difference.cmp(&b.goal_difference),
            SortKey::Efficiency => a.efficiency().total_cmp(&b.efficiency()),
            SortKey::Name => compare_names(&a.team_name, &b.team_name),
        }
    }
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Case-insensitive first so "alpha" sits next to "Alpha"; exact text breaks the tie.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Total order: `key` in `direction`, then the ranking chain without `key`, then team id.
pub fn compare_rows(
    a: &StandingsRow,
    b: &StandingsRow,
    key: SortKey,
    direction: SortDirection,
) -> Ordering {
    direction
        .apply(key.compare(a, b))
        .then_with(|| {
            RANKING
                .iter()
                .filter(|(k, _)| *k != key)
                .map(|(k, d)| d.apply(k.compare(a, b)))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.team_id.cmp(&b.team_id))
}

/// Sort rows in place by `key`, falling back through the ranking chain.
pub fn sort_standings(rows: &mut [StandingsRow], key: SortKey, direction: SortDirection) {
    rows.sort_by(|a, b| compare_rows(a, b, key, direction));
}

/// Compute the ranked table from scratch.
///
/// Only fixtures with both scores count. Fixtures pointing at a team that is not in
/// `teams` are skipped. Rows come out in ranking order.
pub fn compute_standings(teams: &[Team], rounds: &[Round]) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = teams
        .iter()
        .map(|t| StandingsRow::new(t.id, t.name.clone()))
        .collect();
    let index: HashMap<TeamId, usize> = teams
        .iter()
        .enumerate()
        .map(|(i, t)| (t.id, i))
        .collect();

    for m in rounds.iter().flat_map(|r| r.matches.iter()) {
        let Some((home_score, away_score)) = m.score() else {
            continue;
        };
        let (Some(&home), Some(&away)) = (index.get(&m.home_team_id), index.get(&m.away_team_id))
        else {
            log::warn!("Skipping match {}: references an unknown team", m.id);
            continue;
        };
        if home == away {
            log::warn!("Skipping match {}: team plays itself", m.id);
            continue;
        }
        rows[home].record(home_score, away_score);
        rows[away].record(away_score, home_score);
    }

    for row in &mut rows {
        row.update_goal_difference();
    }

    sort_standings(&mut rows, SortKey::Points, SortDirection::Desc);
    rows
}

/// Attach positions and zones to rows already in ranking order.
/// Position 1 is the leader; the bottom `relegation_count` rows are the relegation zone.
pub fn classify(rows: Vec<StandingsRow>, relegation_count: usize) -> Vec<TableRow> {
    let threshold = rows.len().saturating_sub(relegation_count);
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| TableRow {
            position: i + 1,
            leader: i == 0,
            relegation: relegation_count > 0 && i >= threshold,
            efficiency: row.efficiency(),
            row,
        })
        .collect()
}

/// Ranked and annotated table, displayed in `key`/`direction` order.
///
/// Positions and zones always follow the ranking; re-sorting only changes display order.
pub fn league_table(
    teams: &[Team],
    rounds: &[Round],
    relegation_count: usize,
    key: SortKey,
    direction: SortDirection,
) -> Vec<TableRow> {
    let mut table = classify(compute_standings(teams, rounds), relegation_count);
    table.sort_by(|a, b| compare_rows(&a.row, &b.row, key, direction));
    table
}

/// CSV export of a table.
pub fn standings_csv(table: &[TableRow]) -> Result<String, ProjectError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([
            "position",
            "team",
            "points",
            "played",
            "won",
            "drawn",
            "lost",
            "goals_for",
            "goals_against",
            "goal_difference",
            "efficiency",
        ])
        .map_err(|e| ProjectError::Export(e.to_string()))?;
    for t in table {
        let r = &t.row;
        writer
            .write_record([
                t.position.to_string(),
                r.team_name.clone(),
                r.points.to_string(),
                r.played.to_string(),
                r.won.to_string(),
                r.drawn.to_string(),
                r.lost.to_string(),
                r.goals_for.to_string(),
                r.goals_against.to_string(),
                r.goal_difference.to_string(),
                format!("{:.1}", t.efficiency),
            ])
            .map_err(|e| ProjectError::Export(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ProjectError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ProjectError::Export(e.to_string()))
}
