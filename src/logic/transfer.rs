//! Import / export of a whole project as JSON.

use crate::models::{Project, ProjectError};
use std::collections::HashSet;

/// Pretty-printed JSON for download.
pub fn export_project(project: &Project) -> Result<String, ProjectError> {
    serde_json::to_string_pretty(project).map_err(|e| ProjectError::Export(e.to_string()))
}

/// Download file name: whitespace runs in the project name become `_`.
pub fn export_file_name(project: &Project) -> String {
    let stem = project.name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{}_config.json", stem)
}

/// Parse an exported project and reject data the standings cannot trust.
pub fn import_project(json: &str) -> Result<Project, ProjectError> {
    let project: Project = serde_json::from_str(json)
        .map_err(|e| ProjectError::InvalidProjectData(e.to_string()))?;
    validate_project(&project)?;
    log::info!(
        "Imported project {} ({} team(s), {} round(s))",
        project.id,
        project.settings.teams.len(),
        project.rounds.len()
    );
    Ok(project)
}

fn invalid(reason: impl Into<String>) -> ProjectError {
    ProjectError::InvalidProjectData(reason.into())
}

fn validate_project(project: &Project) -> Result<(), ProjectError> {
    if project.name.trim().is_empty() {
        return Err(ProjectError::EmptyProjectName);
    }

    let mut team_ids = HashSet::with_capacity(project.settings.teams.len());
    for team in &project.settings.teams {
        if !team_ids.insert(team.id) {
            return Err(ProjectError::DuplicateTeamId(team.id));
        }
    }

    let mut match_ids = HashSet::new();
    for m in project.fixtures() {
        if !match_ids.insert(m.id) {
            return Err(invalid(format!("duplicate match id {}", m.id)));
        }
        if m.has_partial_score() {
            return Err(invalid(format!("match {} has only one score", m.id)));
        }
        if m.home_team_id == m.away_team_id {
            return Err(invalid(format!("match {} pairs a team with itself", m.id)));
        }
        if !team_ids.contains(&m.home_team_id) || !team_ids.contains(&m.away_team_id) {
            return Err(invalid(format!("match {} references an unknown team", m.id)));
        }
    }
    Ok(())
}
