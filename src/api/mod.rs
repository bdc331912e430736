//! HTTP API module for the shift roster engine.
//!
//! This module provides the REST endpoints that accept preference tables,
//! Excel and CSV uploads and manual forms, and return rosters as JSON or XLSX.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::TableRequest;
pub use response::{ApiError, RosterResponse};
pub use state::AppState;
