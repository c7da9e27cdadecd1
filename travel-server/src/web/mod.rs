//! Web layer for the travel recommendation server.
//!
//! Provides HTTP endpoints for budget recommendations and nearby
//! suggestions, plus the search page.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
