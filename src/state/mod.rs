mod manager;
mod persistence;

pub use manager::{AppState, StateManager};
pub use persistence::{load_foods_csv, load_state, save_state, write_scores_csv};
