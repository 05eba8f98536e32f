use anyhow::Result;
use tracing::{debug, info, trace};

use super::initdb::run_migrations;
use super::serve::run_server;
use crate::config::{connect_database, prepare_sqlite_path};
use crate::schemas::AppState;

pub async fn migrate_and_serve(database_url: &str, bind_address: &str) -> Result<()> {
    trace!("Entering migrate_and_serve function");
    info!("Applying database migrations and starting server");
    debug!("Database URL: {}", database_url);
    debug!("Bind address: {}", bind_address);

    prepare_sqlite_path(database_url)?;
    let db = connect_database(database_url).await?;
    run_migrations(&db).await?;

    // The migrated pool is handed straight to the server.
    run_server(AppState { db }, bind_address).await
}
