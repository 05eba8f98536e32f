use crate::error::ApiResult;
use crate::schemas::AppState;
use axum::{extract::State, response::Json};
use model::entities::user;
use sea_orm::{EntityTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};
use utoipa::ToSchema;

/// User response model. The password column is never exposed.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            is_active: model.is_active,
        }
    }
}

/// Get all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "Users retrieved successfully", body = Vec<UserResponse>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    trace!("Entering get_users function");
    debug!("Fetching all users from database");

    let users = user::Entity::find()
        .order_by_asc(user::Column::Id)
        .all(&state.db)
        .await?;

    let user_count = users.len();
    let user_responses: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    info!("Successfully retrieved {} users", user_count);
    Ok(Json(user_responses))
}
