use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::handlers::favorites::{FavoriteItem, FavoriteKind};
use crate::handlers::people::PersonResponse;
use crate::handlers::planets::PlanetResponse;
use crate::handlers::users::UserResponse;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
}

/// Query parameters carrying the acting user.
///
/// Kept as a raw string so a missing or empty value can be told apart from a
/// malformed one and both reported with the JSON error envelope.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserIdQuery {
    /// ID of the user the request acts for
    pub user_id: Option<String>,
}

/// Request body for adding a favorite
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct FavoriteRequest {
    /// ID of the user adding the favorite
    pub user_id: Option<i32>,
}

/// Plain confirmation message
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::people::get_people,
        crate::handlers::people::get_person,
        crate::handlers::planets::get_planets,
        crate::handlers::planets::get_planet,
        crate::handlers::users::get_users,
        crate::handlers::favorites::get_user_favorites,
        crate::handlers::favorites::add_planet_favorite,
        crate::handlers::favorites::add_people_favorite,
        crate::handlers::favorites::remove_planet_favorite,
        crate::handlers::favorites::remove_people_favorite,
    ),
    components(
        schemas(
            ErrorResponse,
            MessageResponse,
            HealthResponse,
            FavoriteRequest,
            UserIdQuery,
            PersonResponse,
            PlanetResponse,
            UserResponse,
            FavoriteItem,
            FavoriteKind,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "people", description = "People reference data"),
        (name = "planets", description = "Planet reference data"),
        (name = "users", description = "Registered users"),
        (name = "favorites", description = "Per-user favorite planets and people"),
    ),
    info(
        title = "Holocron API",
        description = "Read access to the people and planets datasets, with per-user favorites",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
