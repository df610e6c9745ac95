//! In-memory project collection shared by request handlers.

use crate::models::{Project, ProjectError, ProjectId, ProjectSummary};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// All projects by id. Mutations hold the write lock for the whole
/// read-modify-write, so concurrent result edits never lose updates.
#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: RwLock<HashMap<ProjectId, Project>>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and store a new unconfigured project.
    pub async fn create(&self, name: &str) -> Result<Project, ProjectError> {
        let project = Project::new(name)?;
        self.projects
            .write()
            .await
            .insert(project.id, project.clone());
        log::info!("Created project {} ({})", project.id, project.name);
        Ok(project)
    }

    /// Summaries, oldest first.
    pub async fn list(&self) -> Vec<ProjectSummary> {
        let g = self.projects.read().await;
        let mut summaries: Vec<ProjectSummary> = g.values().map(Project::summary).collect();
        summaries.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        summaries
    }

    /// Snapshot of one project.
    pub async fn get(&self, id: ProjectId) -> Result<Project, ProjectError> {
        self.projects
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(ProjectError::ProjectNotFound(id))
    }

    pub async fn delete(&self, id: ProjectId) -> Result<(), ProjectError> {
        match self.projects.write().await.remove(&id) {
            Some(p) => {
                log::info!("Deleted project {} ({})", p.id, p.name);
                Ok(())
            }
            None => Err(ProjectError::ProjectNotFound(id)),
        }
    }

    /// Apply `f` to a project under the write lock and return the updated project.
    /// The stored project is left untouched if `f` fails.
    pub async fn update<F>(&self, id: ProjectId, f: F) -> Result<Project, ProjectError>
    where
        F: FnOnce(&mut Project) -> Result<(), ProjectError>,
    {
        let mut g = self.projects.write().await;
        let stored = g.get_mut(&id).ok_or(ProjectError::ProjectNotFound(id))?;
        let mut draft = stored.clone();
        f(&mut draft)?;
        *stored = draft;
        Ok(stored.clone())
    }

    /// Insert an imported project, replacing any project with the same id.
    pub async fn import(&self, project: Project) -> Project {
        let mut g = self.projects.write().await;
        if g.insert(project.id, project.clone()).is_some() {
            log::info!("Replaced project {} from import", project.id);
        } else {
            log::info!("Added project {} from import", project.id);
        }
        project
    }
}
