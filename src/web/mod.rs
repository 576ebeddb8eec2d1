//! Web server module
//!
//! Provides the JSON search API and the search page.

mod handlers;
mod routes;
mod state;
mod templates;

pub use handlers::ApiError;
pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
