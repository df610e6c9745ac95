//! League organizer web app: library with models, scheduling/standings logic and the project store.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    classify, compare_rows, compute_standings, configure_project, export_file_name,
    export_project, generate_schedule, import_project, league_table, parse_team_names,
    record_result, sort_standings, standings_csv, team_history, validate_configuration,
    HistoryEntry, SortDirection, SortKey, UNKNOWN_OPPONENT,
};
pub use models::{
    Fixture, MatchId, Outcome, Project, ProjectError, ProjectId, ProjectSettings, ProjectSummary,
    Round, StandingsRow, TableRow, Team, TeamId, DEFAULT_RELEGATION_COUNT, POINTS_FOR_DRAW,
    POINTS_FOR_WIN,
};
pub use store::ProjectStore;
