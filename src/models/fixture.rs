//! Fixture (scheduled match) and Round.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a fixture.
pub type MatchId = Uuid;

/// Result of a fixture seen from one team's side.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Draw,
    Loss,
    /// Not played yet.
    Pending,
}

/// A scheduled match between two distinct teams, played or pending.
///
/// Both scores are `None` until a result is recorded and both are `Some` afterwards.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub id: MatchId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
}

impl Fixture {
    /// New unplayed fixture.
    pub fn new(home_team_id: TeamId, away_team_id: TeamId) -> Self {
        Self {
            id: Uuid::new_v4(),
            home_team_id,
            away_team_id,
            home_score: None,
            away_score: None,
        }
    }

    /// `(home, away)` when the fixture has been played.
    pub fn score(&self) -> Option<(u32, u32)> {
        match (self.home_score, self.away_score) {
            (Some(home), Some(away)) => Some((home, away)),
            _ => None,
        }
    }

    pub fn is_played(&self) -> bool {
        self.score().is_some()
    }

    /// True if exactly one of the two scores is set.
    pub fn has_partial_score(&self) -> bool {
        self.home_score.is_some() != self.away_score.is_some()
    }

    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    /// The other side of the fixture, if `team_id` plays in it.
    pub fn opponent_of(&self, team_id: TeamId) -> Option<TeamId> {
        if self.home_team_id == team_id {
            Some(self.away_team_id)
        } else if self.away_team_id == team_id {
            Some(self.home_team_id)
        } else {
            None
        }
    }

    /// Same pairing with home and away swapped, unplayed, fresh id.
    pub fn reversed(&self) -> Self {
        Self::new(self.away_team_id, self.home_team_id)
    }

    /// Outcome from `team_id`'s perspective. `Pending` for unplayed fixtures and
    /// for teams not involved.
    pub fn outcome_for(&self, team_id: TeamId) -> Outcome {
        let Some((home, away)) = self.score() else {
            return Outcome::Pending;
        };
        let (own, other) = if self.home_team_id == team_id {
            (home, away)
        } else if self.away_team_id == team_id {
            (away, home)
        } else {
            return Outcome::Pending;
        };
        match own.cmp(&other) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::Loss,
        }
    }
}

/// One matchday: a 1-based number and its fixtures in emission order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub number: u32,
    pub matches: Vec<Fixture>,
}
