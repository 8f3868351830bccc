//! Application state, seed fixtures and id issuing

mod app_state;
pub mod fixtures;
mod ids;

pub use app_state::*;
pub use ids::*;
