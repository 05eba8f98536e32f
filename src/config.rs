use anyhow::{Context, Result};
use sea_orm::{Database, DatabaseConnection};
use std::path::Path;
use tracing::{debug, info};

use crate::schemas::AppState;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://holocron.db?mode=rwc";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Returns the on-disk path of a file-backed SQLite URL, or `None` for other
/// backends and in-memory databases.
pub fn sqlite_file_path(database_url: &str) -> Option<&Path> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path == ":memory:" {
        None
    } else {
        Some(Path::new(path))
    }
}

/// Create the parent directory of a SQLite database file if it is missing.
pub fn prepare_sqlite_path(database_url: &str) -> Result<()> {
    let Some(parent) = sqlite_file_path(database_url).and_then(Path::parent) else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.exists() {
        return Ok(());
    }

    info!("Creating database directory {}", parent.display());
    std::fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create directory {}", parent.display()))
}

/// Open a connection pool for `database_url`.
pub async fn connect_database(database_url: &str) -> Result<DatabaseConnection> {
    info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url)
        .await
        .with_context(|| format!("Failed to connect to database '{}'", database_url))?;
    debug!("Database connection established");
    Ok(db)
}

/// Initialize application state for the given database
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    let db = connect_database(database_url).await?;
    Ok(AppState { db })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_file_path() {
        assert_eq!(
            sqlite_file_path("sqlite://data/holocron.db?mode=rwc"),
            Some(Path::new("data/holocron.db"))
        );
        assert_eq!(
            sqlite_file_path("sqlite:///var/lib/holocron.db"),
            Some(Path::new("/var/lib/holocron.db"))
        );
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgresql://user:pw@localhost/holocron"), None);
    }

    #[test]
    fn test_prepare_sqlite_path_ignores_other_backends() {
        assert!(prepare_sqlite_path("postgresql://localhost/holocron").is_ok());
        assert!(prepare_sqlite_path("sqlite::memory:").is_ok());
        assert!(prepare_sqlite_path("sqlite://holocron.db").is_ok());
    }
}
