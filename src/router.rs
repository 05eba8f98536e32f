use crate::handlers::{
    favorites::{
        add_people_favorite, add_planet_favorite, get_user_favorites, remove_people_favorite,
        remove_planet_favorite,
    },
    health::health_check,
    people::{get_people, get_person},
    planets::{get_planet, get_planets},
    users::get_users,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Reference data
        .route("/people", get(get_people))
        .route("/people/:people_id", get(get_person))
        .route("/planets", get(get_planets))
        .route("/planets/:planet_id", get(get_planet))
        // Users and their favorites
        .route("/users", get(get_users))
        .route("/users/favorites", get(get_user_favorites))
        .route(
            "/favorite/planet/:planet_id",
            post(add_planet_favorite).delete(remove_planet_favorite),
        )
        .route(
            "/favorite/people/:people_id",
            post(add_people_favorite).delete(remove_people_favorite),
        )
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
