use crate::error::ApiResult;
use crate::schemas::{AppState, HealthResponse};
use axum::{extract::State, response::Json};
use sea_orm::DatabaseConnection;
use tracing::{debug, instrument, warn};

/// Reports "connected" when the pool answers a ping, "disconnected" otherwise.
/// A failed ping degrades the report rather than failing the request.
async fn database_status(db: &DatabaseConnection) -> &'static str {
    match db.ping().await {
        Ok(()) => "connected",
        Err(err) => {
            warn!("Database ping failed: {}", err);
            "disconnected"
        }
    }
}

/// Liveness check for the service and its store
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up; `database` reports store reachability", body = HealthResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let database = database_status(&state.db).await;
    debug!("Health check: database {}", database);

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_database_status_connected() {
        let db = setup_test_db().await;
        assert_eq!(database_status(&db).await, "connected");
    }

    #[tokio::test]
    async fn test_database_status_after_close() {
        let db = setup_test_db().await;
        let handle = db.clone();
        db.close().await.unwrap();
        assert_eq!(database_status(&handle).await, "disconnected");
    }
}
