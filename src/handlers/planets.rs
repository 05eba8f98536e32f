use crate::error::{ApiError, ApiResult};
use crate::extractors::AppPath;
use crate::schemas::AppState;
use axum::{
    extract::State,
    response::Json,
};
use model::entities::planet;
use sea_orm::{EntityTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace, warn};
use utoipa::ToSchema;

/// Planet response model
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
}

impl From<planet::Model> for PlanetResponse {
    fn from(model: planet::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            terrain: model.terrain,
            population: model.population,
        }
    }
}

/// Get all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = "planets",
    responses(
        (status = 200, description = "Planets retrieved successfully", body = Vec<PlanetResponse>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_planets(State(state): State<AppState>) -> ApiResult<Json<Vec<PlanetResponse>>> {
    trace!("Entering get_planets function");

    let planets = planet::Entity::find()
        .order_by_asc(planet::Column::Id)
        .all(&state.db)
        .await?;

    info!("Successfully retrieved {} planets", planets.len());
    Ok(Json(planets.into_iter().map(PlanetResponse::from).collect()))
}

/// Get a specific planet by ID
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = "planets",
    params(
        ("planet_id" = i32, Path, description = "Planet ID"),
    ),
    responses(
        (status = 200, description = "Planet retrieved successfully", body = PlanetResponse),
        (status = 400, description = "Malformed planet ID", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Planet not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_planet(
    AppPath(planet_id): AppPath<i32>,
    State(state): State<AppState>,
) -> ApiResult<Json<PlanetResponse>> {
    trace!("Entering get_planet function for planet_id: {}", planet_id);

    match planet::Entity::find_by_id(planet_id).one(&state.db).await? {
        Some(planet) => {
            debug!("Found planet {} ({:?})", planet.id, planet.name);
            Ok(Json(PlanetResponse::from(planet)))
        }
        None => {
            warn!("Planet with ID {} not found", planet_id);
            Err(ApiError::not_found("Planet not found"))
        }
    }
}
