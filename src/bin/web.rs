//! Single binary web server: REST API over the in-memory project store.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080). Log level via RUST_LOG.

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use league_organizer_web::{
    configure_project, export_file_name, export_project, import_project, league_table,
    parse_team_names, record_result, standings_csv, team_history, MatchId, ProjectError,
    ProjectId, ProjectStore, SortDirection, SortKey, Team, TeamId, DEFAULT_RELEGATION_COUNT,
};
use serde::Deserialize;

type AppState = Data<ProjectStore>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateProjectBody {
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigurationBody {
    #[serde(default = "default_double_round")]
    double_round: bool,
    #[serde(default = "default_relegation_count")]
    relegation_count: usize,
    /// One entry per team.
    #[serde(default)]
    team_names: Vec<String>,
    /// Newline-separated team names, appended after `team_names`.
    #[serde(default)]
    bulk: String,
}

fn default_double_round() -> bool {
    true
}

fn default_relegation_count() -> usize {
    DEFAULT_RELEGATION_COUNT
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchResultBody {
    home_score: Option<u32>,
    away_score: Option<u32>,
}

#[derive(Deserialize)]
struct StandingsQuery {
    sort: Option<SortKey>,
    dir: Option<SortDirection>,
}

/// Path segment: project id (e.g. /api/projects/{id})
#[derive(Deserialize)]
struct ProjectPath {
    id: ProjectId,
}

/// Path segments: project id and match id
#[derive(Deserialize)]
struct ProjectMatchPath {
    id: ProjectId,
    match_id: MatchId,
}

/// Path segments: project id and team id
#[derive(Deserialize)]
struct ProjectTeamPath {
    id: ProjectId,
    team_id: TeamId,
}

/// Path segments: project id and round number
#[derive(Deserialize)]
struct ProjectRoundPath {
    id: ProjectId,
    number: u32,
}

fn error_response(e: ProjectError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        ProjectError::ProjectNotFound(_)
        | ProjectError::MatchNotFound(_)
        | ProjectError::TeamNotFound(_) => HttpResponse::NotFound().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "league-organizer-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// List projects, oldest first.
#[get("/api/projects")]
async fn api_list_projects(state: AppState) -> HttpResponse {
    HttpResponse::Ok().json(state.list().await)
}

/// Create a new (unconfigured) project.
#[post("/api/projects")]
async fn api_create_project(state: AppState, body: Json<CreateProjectBody>) -> HttpResponse {
    match state.create(&body.name).await {
        Ok(p) => HttpResponse::Ok().json(p),
        Err(e) => error_response(e),
    }
}

/// Get a project by id (404 if not found).
#[get("/api/projects/{id}")]
async fn api_get_project(state: AppState, path: Path<ProjectPath>) -> HttpResponse {
    match state.get(path.id).await {
        Ok(p) => HttpResponse::Ok().json(p),
        Err(e) => error_response(e),
    }
}

#[delete("/api/projects/{id}")]
async fn api_delete_project(state: AppState, path: Path<ProjectPath>) -> HttpResponse {
    match state.delete(path.id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(e),
    }
}

/// Save rules and teams, generate the schedule (replaces any previous one).
#[put("/api/projects/{id}/configuration")]
async fn api_configure_project(
    state: AppState,
    path: Path<ProjectPath>,
    body: Json<ConfigurationBody>,
) -> HttpResponse {
    let body = body.into_inner();
    let mut teams: Vec<Team> = body
        .team_names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .map(Team::new)
        .collect();
    teams.extend(parse_team_names(&body.bulk));
    let result = state
        .update(path.id, |p| {
            configure_project(p, body.double_round, body.relegation_count, teams)
        })
        .await;
    match result {
        Ok(p) => HttpResponse::Ok().json(p),
        Err(e) => error_response(e),
    }
}

/// Record or clear one match result.
#[put("/api/projects/{id}/matches/{match_id}")]
async fn api_record_result(
    state: AppState,
    path: Path<ProjectMatchPath>,
    body: Json<MatchResultBody>,
) -> HttpResponse {
    let result = state
        .update(path.id, |p| {
            record_result(p, path.match_id, body.home_score, body.away_score)
        })
        .await;
    match result {
        Ok(p) => HttpResponse::Ok().json(p),
        Err(e) => error_response(e),
    }
}

#[get("/api/projects/{id}/rounds/{number}")]
async fn api_get_round(state: AppState, path: Path<ProjectRoundPath>) -> HttpResponse {
    let project = match state.get(path.id).await {
        Ok(p) => p,
        Err(e) => return error_response(e),
    };
    match project.round(path.number) {
        Some(round) => HttpResponse::Ok().json(round),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "Round not found" })),
    }
}

/// Ranked table with zones. `sort`/`dir` only change display order.
#[get("/api/projects/{id}/standings")]
async fn api_standings(
    state: AppState,
    path: Path<ProjectPath>,
    query: Query<StandingsQuery>,
) -> HttpResponse {
    let project = match state.get(path.id).await {
        Ok(p) => p,
        Err(e) => return error_response(e),
    };
    let key = query.sort.unwrap_or_default();
    let direction = query.dir.unwrap_or_else(|| key.default_direction());
    HttpResponse::Ok().json(league_table(
        project.teams(),
        &project.rounds,
        project.settings.relegation_count,
        key,
        direction,
    ))
}

#[get("/api/projects/{id}/standings.csv")]
async fn api_standings_csv(state: AppState, path: Path<ProjectPath>) -> HttpResponse {
    let project = match state.get(path.id).await {
        Ok(p) => p,
        Err(e) => return error_response(e),
    };
    let table = league_table(
        project.teams(),
        &project.rounds,
        project.settings.relegation_count,
        SortKey::Points,
        SortDirection::Desc,
    );
    match standings_csv(&table) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(csv),
        Err(e) => error_response(e),
    }
}

/// Every fixture of one team, played or pending.
#[get("/api/projects/{id}/teams/{team_id}/history")]
async fn api_team_history(state: AppState, path: Path<ProjectTeamPath>) -> HttpResponse {
    let project = match state.get(path.id).await {
        Ok(p) => p,
        Err(e) => return error_response(e),
    };
    match team_history(project.teams(), &project.rounds, path.team_id) {
        Ok(history) => HttpResponse::Ok().json(history),
        Err(e) => error_response(e),
    }
}

/// Download the project as JSON.
#[get("/api/projects/{id}/export")]
async fn api_export_project(state: AppState, path: Path<ProjectPath>) -> HttpResponse {
    let project = match state.get(path.id).await {
        Ok(p) => p,
        Err(e) => return error_response(e),
    };
    match export_project(&project) {
        Ok(json) => HttpResponse::Ok()
            .content_type("application/json")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", export_file_name(&project)),
            ))
            .body(json),
        Err(e) => error_response(e),
    }
}

/// Upload an exported project; replaces a project with the same id, else adds it.
#[post("/api/projects/import")]
async fn api_import_project(state: AppState, body: String) -> HttpResponse {
    match import_project(&body) {
        Ok(project) => HttpResponse::Ok().json(state.import(project).await),
        Err(e) => error_response(e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(ProjectStore::new());

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(favicon)
            .service(api_list_projects)
            .service(api_create_project)
            .service(api_import_project)
            .service(api_get_project)
            .service(api_delete_project)
            .service(api_configure_project)
            .service(api_record_result)
            .service(api_get_round)
            .service(api_standings)
            .service(api_standings_csv)
            .service(api_team_history)
            .service(api_export_project)
    })
    .bind(bind)?
    .run()
    .await
}
