//! HTTP API for the pastry menu.
//!
//! Routes:
//! - `GET    /pastries`      list every pastry (404 when the menu is empty)
//! - `POST   /pastries`      add a pastry
//! - `GET    /pastries/{id}` fetch one pastry
//! - `PUT    /pastries/{id}` partially update a pastry
//! - `DELETE /pastries/{id}` remove a pastry
//!
//! Successes are wrapped in [`Envelope`]; every failure goes through
//! [`ApiError`] and comes back as a JSON [`ErrorBody`].

mod config;
mod error;
mod handlers;
mod response;
mod state;

use axum::Router;
use axum::routing::get;

pub use config::Args;
pub use error::{ApiError, ErrorBody};
pub use response::Envelope;
pub use state::AppState;

/// Build the HTTP API router over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/pastries",
            get(handlers::list_pastries).post(handlers::create_pastry),
        )
        .route(
            "/pastries/{id}",
            get(handlers::get_pastry)
                .put(handlers::update_pastry)
                .delete(handlers::delete_pastry),
        )
        .fallback(handlers::route_not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
}
