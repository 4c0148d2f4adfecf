//! HTTP surface of the listings API

mod error;
mod extract;
mod properties;

use std::sync::Arc;

use axum::{middleware, routing::post, Router};
use reqwest::Client;

use crate::auth::Authenticator;
use crate::config::Config;

pub use error::*;
pub use extract::*;
pub use properties::*;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Verifies bearer tokens and enriches callers with profile data
    pub authenticator: Arc<Authenticator>,
}

impl AppState {
    /// Create the application state from configuration
    pub fn new(config: &Config) -> Self {
        let http_client = Client::new();

        Self {
            authenticator: Arc::new(Authenticator::new(config, http_client)),
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/create/", post(create_property))
        .layer(middleware::from_fn_with_state(state, authenticate))
}
