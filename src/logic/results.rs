//! Result entry for scheduled fixtures.

use crate::models::{MatchId, Project, ProjectError};

/// Record (both scores) or clear (neither score) the result of one fixture.
pub fn record_result(
    project: &mut Project,
    match_id: MatchId,
    home_score: Option<u32>,
    away_score: Option<u32>,
) -> Result<(), ProjectError> {
    if !project.is_configured {
        return Err(ProjectError::NotConfigured);
    }
    if home_score.is_some() != away_score.is_some() {
        return Err(ProjectError::PartialScore);
    }
    let fixture = project
        .fixture_mut(match_id)
        .ok_or(ProjectError::MatchNotFound(match_id))?;
    fixture.home_score = home_score;
    fixture.away_score = away_score;
    Ok(())
}
