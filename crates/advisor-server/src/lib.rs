//! farm-advisor HTTP Server
//!
//! Axum router, configuration and bootstrap helpers. The binary in
//! `main.rs` wires these together; tests drive the router in-process.

pub mod config;
pub mod handlers;
pub mod startup;
pub mod state;

pub use state::AppState;
