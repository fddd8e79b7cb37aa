pub mod config;
pub mod demos;
pub mod responses;
pub mod routes;
pub mod services;
pub mod state;

pub use state::AppState;
