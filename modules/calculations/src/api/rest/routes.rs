use std::sync::Arc;

use axum::routing::post;
use axum::{Extension, Router};

use crate::domain::service::Service;

use super::handlers;

/// Build the module router. The service handle travels as an axum
/// `Extension`, injected once here.
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route(
            "/calculations/v1/calculations",
            post(handlers::create_calculation)
                .get(handlers::get_history)
                .delete(handlers::delete_history),
        )
        .layer(Extension(service))
}
