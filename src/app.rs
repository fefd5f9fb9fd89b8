use std::sync::Arc;

use axum::{Extension, Router};
use sqlx::MySqlPool;
use tower_http::trace::TraceLayer;

use crate::repositories::{EmployeeRepository, MySqlEmployeeRepository};
use crate::services::EmployeeService;

pub fn build_router() -> Router {
    use axum::http::Method;
    use tower_http::cors::{Any, CorsLayer};

    let mut app = Router::new()
        .merge(crate::routes::employee_routes::employee_routes())
        .merge(crate::routes::health_routes::health_routes());

    // Configure CORS based on environment variables:

    let cors_allowed = std::env::var("CORS_ALLOWED_ORIGINS").ok();
    let enable_cors = std::env::var("ENABLE_CORS")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    if enable_cors || cors_allowed.is_some() {
        let methods = [
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ];
        // If CORS_ALLOWED_ORIGINS is exactly "*" treat it as permissive Any. Otherwise parse a CSV of origins.
        let cors_layer = match cors_allowed {
            Some(list) if list.trim() != "*" => {
                use axum::http::header::HeaderValue;
                use tower_http::cors::AllowOrigin;
                let origins = list
                    .split(',')
                    .filter_map(|s| HeaderValue::from_str(s.trim()).ok())
                    .collect::<Vec<HeaderValue>>();
                CorsLayer::new()
                    .allow_origin(AllowOrigin::list(origins))
                    .allow_methods(methods)
                    .allow_headers(Any)
            }
            _ => CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(methods)
                .allow_headers(Any),
        };
        app = app.layer(cors_layer);
    }

    // Request spans; must wrap CORS so preflights are traced too
    app.layer(TraceLayer::new_for_http())
}

/// Router wired to an arbitrary employee store.
pub fn create_app_with_repository(repository: Arc<dyn EmployeeRepository>) -> Router {
    build_router().layer(Extension(EmployeeService::new(repository)))
}

pub fn create_app(pool: MySqlPool) -> Router {
    create_app_with_repository(Arc::new(MySqlEmployeeRepository::new(pool)))
}
