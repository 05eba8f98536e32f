use crate::error::{ApiError, ApiResult};
use crate::extractors::{AppJson, AppPath, AppQuery};
use crate::schemas::{AppState, FavoriteRequest, MessageResponse, UserIdQuery};
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use model::entities::{favorite, favorite::FavoriteTarget, people, planet, user};
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, instrument, trace, warn};
use utoipa::ToSchema;

const USER_ID_QUERY_REQUIRED: &str = "user_id is required as query param";
const USER_ID_BODY_REQUIRED: &str = "user_id required in body";

/// Which dataset a favorite points into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    Planet,
    People,
}

impl FavoriteKind {
    fn target(self, id: i32) -> FavoriteTarget {
        match self {
            FavoriteKind::Planet => FavoriteTarget::Planet(id),
            FavoriteKind::People => FavoriteTarget::People(id),
        }
    }

    fn not_found(self) -> &'static str {
        match self {
            FavoriteKind::Planet => "Planet not found",
            FavoriteKind::People => "Person not found",
        }
    }

    fn added(self) -> &'static str {
        match self {
            FavoriteKind::Planet => "Planet added to favorites",
            FavoriteKind::People => "Person added to favorites",
        }
    }

    fn already_added(self) -> &'static str {
        match self {
            FavoriteKind::Planet => "Planet already in favorites",
            FavoriteKind::People => "Person already in favorites",
        }
    }

    fn removed(self) -> &'static str {
        match self {
            FavoriteKind::Planet => "Planet favorite removed",
            FavoriteKind::People => "People favorite removed",
        }
    }
}

impl From<FavoriteTarget> for FavoriteKind {
    fn from(target: FavoriteTarget) -> Self {
        match target {
            FavoriteTarget::Planet(_) => FavoriteKind::Planet,
            FavoriteTarget::People(_) => FavoriteKind::People,
        }
    }
}

/// One entry of a user's favorites list
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FavoriteItem {
    #[serde(rename = "type")]
    pub kind: FavoriteKind,
    /// ID of the planet or person
    pub id: i32,
    pub name: Option<String>,
}

/// Extracts a usable user id from the query string.
fn require_query_user_id(query: &UserIdQuery) -> ApiResult<i32> {
    let raw = query
        .user_id
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ApiError::validation(USER_ID_QUERY_REQUIRED))?;

    raw.parse::<i32>()
        .map_err(|_| ApiError::validation("user_id must be an integer"))
}

async fn ensure_item_exists(db: &DatabaseConnection, target: FavoriteTarget) -> ApiResult<()> {
    let exists = match target {
        FavoriteTarget::Planet(id) => planet::Entity::find_by_id(id).one(db).await?.is_some(),
        FavoriteTarget::People(id) => people::Entity::find_by_id(id).one(db).await?.is_some(),
    };

    if exists {
        Ok(())
    } else {
        warn!("Favorite target {:?} does not exist", target);
        Err(ApiError::not_found(FavoriteKind::from(target).not_found()))
    }
}

/// Resolves each favorite to its item in two batched lookups.
/// Favorites whose item no longer exists are skipped.
async fn resolve_favorites(
    db: &DatabaseConnection,
    favorites: Vec<favorite::Model>,
) -> ApiResult<Vec<FavoriteItem>> {
    let planet_ids: Vec<i32> = favorites.iter().filter_map(|f| f.target()?.planet_id()).collect();
    let people_ids: Vec<i32> = favorites.iter().filter_map(|f| f.target()?.people_id()).collect();

    let planets: HashMap<i32, planet::Model> = if planet_ids.is_empty() {
        HashMap::new()
    } else {
        planet::Entity::find()
            .filter(planet::Column::Id.is_in(planet_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect()
    };

    let people: HashMap<i32, people::Model> = if people_ids.is_empty() {
        HashMap::new()
    } else {
        people::Entity::find()
            .filter(people::Column::Id.is_in(people_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect()
    };

    let items = favorites
        .iter()
        .filter_map(|fav| {
            let item = match fav.target() {
                Some(FavoriteTarget::Planet(id)) => planets.get(&id).map(|planet| FavoriteItem {
                    kind: FavoriteKind::Planet,
                    id: planet.id,
                    name: planet.name.clone(),
                }),
                Some(FavoriteTarget::People(id)) => people.get(&id).map(|person| FavoriteItem {
                    kind: FavoriteKind::People,
                    id: person.id,
                    name: Some(person.name.clone()),
                }),
                None => None,
            };
            if item.is_none() {
                debug!("Skipping favorite {} with unresolved target", fav.id);
            }
            item
        })
        .collect();

    Ok(items)
}

async fn add_favorite(
    state: &AppState,
    kind: FavoriteKind,
    item_id: i32,
    request: FavoriteRequest,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let user_id = request
        .user_id
        .ok_or_else(|| ApiError::validation(USER_ID_BODY_REQUIRED))?;
    let target = kind.target(item_id);
    debug!("User {} adding favorite {:?}", user_id, target);

    ensure_item_exists(&state.db, target).await?;

    if user::Entity::find_by_id(user_id).one(&state.db).await?.is_none() {
        warn!("User with ID {} not found while adding favorite", user_id);
        return Err(ApiError::not_found("User not found"));
    }

    // The unique index on (user_id, <item column>) makes this an atomic
    // insert-if-absent; zero affected rows means the favorite already existed.
    trace!("Inserting favorite with ON CONFLICT DO NOTHING");
    let inserted = favorite::Entity::insert(target.into_active_model(user_id))
        .on_conflict(
            OnConflict::columns([favorite::Column::UserId, target.column()])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&state.db)
        .await?;

    if inserted == 0 {
        debug!("Favorite {:?} already present for user {}", target, user_id);
        Ok((StatusCode::OK, Json(MessageResponse::new(kind.already_added()))))
    } else {
        info!("User {} added favorite {:?}", user_id, target);
        Ok((StatusCode::CREATED, Json(MessageResponse::new(kind.added()))))
    }
}

async fn remove_favorite(
    state: &AppState,
    kind: FavoriteKind,
    item_id: i32,
    query: &UserIdQuery,
) -> ApiResult<Json<MessageResponse>> {
    let user_id = require_query_user_id(query)?;
    let target = kind.target(item_id);
    debug!("User {} removing favorite {:?}", user_id, target);

    let result = favorite::Entity::delete_many()
        .filter(favorite::Column::UserId.eq(user_id))
        .filter(target.column().eq(target.id()))
        .exec(&state.db)
        .await?;

    if result.rows_affected == 0 {
        warn!("No favorite {:?} found for user {}", target, user_id);
        return Err(ApiError::not_found("Favorite not found"));
    }

    info!("User {} removed favorite {:?}", user_id, target);
    Ok(Json(MessageResponse::new(kind.removed())))
}

/// Get the favorites of a user
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = "favorites",
    params(
        ("user_id" = i32, Query, description = "User ID"),
    ),
    responses(
        (status = 200, description = "Favorites retrieved successfully", body = Vec<FavoriteItem>),
        (status = 400, description = "user_id missing or malformed", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_user_favorites(
    AppQuery(query): AppQuery<UserIdQuery>,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<FavoriteItem>>> {
    trace!("Entering get_user_favorites function");
    let user_id = require_query_user_id(&query)?;

    let favorites = favorite::Entity::find()
        .filter(favorite::Column::UserId.eq(user_id))
        .order_by_asc(favorite::Column::Id)
        .all(&state.db)
        .await?;
    debug!("Found {} favorite rows for user {}", favorites.len(), user_id);

    let items = resolve_favorites(&state.db, favorites).await?;
    info!("Successfully retrieved {} favorites for user {}", items.len(), user_id);
    Ok(Json(items))
}

/// Add a planet to a user's favorites
#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    tag = "favorites",
    params(
        ("planet_id" = i32, Path, description = "Planet ID"),
    ),
    request_body = FavoriteRequest,
    responses(
        (status = 201, description = "Planet added to favorites", body = MessageResponse),
        (status = 200, description = "Planet already in favorites", body = MessageResponse),
        (status = 400, description = "user_id missing or malformed ID", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Planet or user not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn add_planet_favorite(
    AppPath(planet_id): AppPath<i32>,
    State(state): State<AppState>,
    AppJson(request): AppJson<FavoriteRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    add_favorite(&state, FavoriteKind::Planet, planet_id, request).await
}

/// Add a person to a user's favorites
#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}",
    tag = "favorites",
    params(
        ("people_id" = i32, Path, description = "Person ID"),
    ),
    request_body = FavoriteRequest,
    responses(
        (status = 201, description = "Person added to favorites", body = MessageResponse),
        (status = 200, description = "Person already in favorites", body = MessageResponse),
        (status = 400, description = "user_id missing or malformed ID", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Person or user not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn add_people_favorite(
    AppPath(people_id): AppPath<i32>,
    State(state): State<AppState>,
    AppJson(request): AppJson<FavoriteRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    add_favorite(&state, FavoriteKind::People, people_id, request).await
}

/// Remove a planet from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = "favorites",
    params(
        ("planet_id" = i32, Path, description = "Planet ID"),
        ("user_id" = i32, Query, description = "User ID"),
    ),
    responses(
        (status = 200, description = "Planet favorite removed", body = MessageResponse),
        (status = 400, description = "user_id missing or malformed", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Favorite not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn remove_planet_favorite(
    AppPath(planet_id): AppPath<i32>,
    AppQuery(query): AppQuery<UserIdQuery>,
    State(state): State<AppState>,
) -> ApiResult<Json<MessageResponse>> {
    remove_favorite(&state, FavoriteKind::Planet, planet_id, &query).await
}

/// Remove a person from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/people/{people_id}",
    tag = "favorites",
    params(
        ("people_id" = i32, Path, description = "Person ID"),
        ("user_id" = i32, Query, description = "User ID"),
    ),
    responses(
        (status = 200, description = "People favorite removed", body = MessageResponse),
        (status = 400, description = "user_id missing or malformed", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Favorite not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn remove_people_favorite(
    AppPath(people_id): AppPath<i32>,
    AppQuery(query): AppQuery<UserIdQuery>,
    State(state): State<AppState>,
) -> ApiResult<Json<MessageResponse>> {
    remove_favorite(&state, FavoriteKind::People, people_id, &query).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(user_id: Option<&str>) -> UserIdQuery {
        UserIdQuery {
            user_id: user_id.map(str::to_string),
        }
    }

    #[test]
    fn test_require_query_user_id() {
        assert_eq!(require_query_user_id(&query(Some("7"))).unwrap(), 7);
        assert_eq!(require_query_user_id(&query(Some(" 12 "))).unwrap(), 12);

        let missing = require_query_user_id(&query(None)).unwrap_err();
        assert_eq!(missing.to_string(), USER_ID_QUERY_REQUIRED);

        let empty = require_query_user_id(&query(Some(""))).unwrap_err();
        assert_eq!(empty.to_string(), USER_ID_QUERY_REQUIRED);

        let malformed = require_query_user_id(&query(Some("abc"))).unwrap_err();
        assert!(matches!(malformed, ApiError::Validation(_)));
        assert_eq!(malformed.to_string(), "user_id must be an integer");
    }

    #[test]
    fn test_favorite_kind_serializes_lowercase() {
        let item = FavoriteItem {
            kind: FavoriteKind::People,
            id: 3,
            name: Some("Owen Lars".to_string()),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "people", "id": 3, "name": "Owen Lars"})
        );
        assert_eq!(serde_json::to_value(FavoriteKind::Planet).unwrap(), "planet");
    }

    #[test]
    fn test_kind_round_trips_through_target() {
        for kind in [FavoriteKind::Planet, FavoriteKind::People] {
            assert_eq!(FavoriteKind::from(kind.target(9)), kind);
        }
    }
}
