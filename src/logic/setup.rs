//! Configuration phase: team list input, validation, schedule generation.

use crate::logic::scheduler::generate_schedule;
use crate::models::{Project, ProjectError, Team};
use std::collections::HashSet;

/// One team per non-blank line (bulk input), names trimmed.
pub fn parse_team_names(input: &str) -> Vec<Team> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Team::new)
        .collect()
}

/// Check a team list and relegation count before a schedule is generated.
pub fn validate_configuration(teams: &[Team], relegation_count: usize) -> Result<(), ProjectError> {
    if teams.len() < 2 {
        return Err(ProjectError::NotEnoughTeams);
    }
    if relegation_count >= teams.len() {
        return Err(ProjectError::RelegationCountTooLarge {
            relegation_count,
            teams: teams.len(),
        });
    }
    let mut seen = HashSet::with_capacity(teams.len());
    for team in teams {
        if team.name.trim().is_empty() {
            return Err(ProjectError::EmptyTeamName);
        }
        if !seen.insert(team.id) {
            return Err(ProjectError::DuplicateTeamId(team.id));
        }
    }
    Ok(())
}

/// Save settings and generate the schedule. Replaces any previous schedule and results.
pub fn configure_project(
    project: &mut Project,
    double_round: bool,
    relegation_count: usize,
    teams: Vec<Team>,
) -> Result<(), ProjectError> {
    validate_configuration(&teams, relegation_count)?;
    project.rounds = generate_schedule(&teams, double_round);
    project.settings.double_round = double_round;
    project.settings.relegation_count = relegation_count;
    project.settings.teams = teams;
    project.is_configured = true;
    log::info!(
        "Configured project {} with {} team(s), {} round(s)",
        project.id,
        project.settings.teams.len(),
        project.rounds.len()
    );
    Ok(())
}
