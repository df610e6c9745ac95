//! League business logic: scheduling, standings, setup, results, history, import/export.

mod history;
mod results;
mod scheduler;
mod setup;
mod standings;
mod transfer;

pub use history::{team_history, HistoryEntry, UNKNOWN_OPPONENT};
pub use results::record_result;
pub use scheduler::generate_schedule;
pub use setup::{configure_project, parse_team_names, validate_configuration};
pub use standings::{
    classify, compare_rows, compute_standings, league_table, sort_standings, standings_csv,
    SortDirection, SortKey,
};
pub use transfer::{export_file_name, export_project, import_project};
