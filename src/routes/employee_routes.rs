use axum::{
    Router,
    routing::{get, post},
};

// Import employee handlers
use crate::handlers::employee_handler::{destroy, index, patch, show, store, update};

pub fn employee_routes() -> Router {
    Router::new()
        .route("/api/employees", get(index))
        .route("/api/employees/create", post(store))
        .route(
            "/api/employees/{id}",
            get(show).put(update).patch(patch).delete(destroy),
        )
}
