use crate::error::{ApiError, ApiResult};
use crate::extractors::AppPath;
use crate::schemas::AppState;
use axum::{
    extract::State,
    response::Json,
};
use model::entities::people;
use sea_orm::{EntityTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace, warn};
use utoipa::ToSchema;

/// Person response model
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PersonResponse {
    pub id: i32,
    pub name: String,
    pub height: Option<String>,
    pub gender: Option<String>,
}

impl From<people::Model> for PersonResponse {
    fn from(model: people::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            height: model.height,
            gender: model.gender,
        }
    }
}

/// Get all people
#[utoipa::path(
    get,
    path = "/people",
    tag = "people",
    responses(
        (status = 200, description = "People retrieved successfully", body = Vec<PersonResponse>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_people(State(state): State<AppState>) -> ApiResult<Json<Vec<PersonResponse>>> {
    trace!("Entering get_people function");

    let people = people::Entity::find()
        .order_by_asc(people::Column::Id)
        .all(&state.db)
        .await?;

    info!("Successfully retrieved {} people", people.len());
    Ok(Json(people.into_iter().map(PersonResponse::from).collect()))
}

/// Get a specific person by ID
#[utoipa::path(
    get,
    path = "/people/{people_id}",
    tag = "people",
    params(
        ("people_id" = i32, Path, description = "Person ID"),
    ),
    responses(
        (status = 200, description = "Person retrieved successfully", body = PersonResponse),
        (status = 400, description = "Malformed person ID", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Person not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_person(
    AppPath(people_id): AppPath<i32>,
    State(state): State<AppState>,
) -> ApiResult<Json<PersonResponse>> {
    trace!("Entering get_person function for people_id: {}", people_id);

    match people::Entity::find_by_id(people_id).one(&state.db).await? {
        Some(person) => {
            debug!("Found person {} ({})", person.id, person.name);
            Ok(Json(PersonResponse::from(person)))
        }
        None => {
            warn!("Person with ID {} not found", people_id);
            Err(ApiError::not_found("Person not found"))
        }
    }
}
