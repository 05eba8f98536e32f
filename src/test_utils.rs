#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use migration::{Migrator, MigratorTrait};
    use model::entities::{people, planet, user};
    use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Names of the seeded people, in id order starting at 1
    pub const SEEDED_PEOPLE: [&str; 3] = ["Luke Skywalker", "C-3PO", "Owen Lars"];
    /// Names of the seeded planets, in id order starting at 1
    pub const SEEDED_PLANETS: [&str; 2] = ["Tatooine", "Alderaan"];

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        // Run migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// Insert two users, three people and two planets.
    pub async fn seed_reference_data(db: &DatabaseConnection) {
        for (email, is_active) in [("user1@example.com", true), ("user2@example.com", false)] {
            user::ActiveModel {
                email: Set(email.to_string()),
                password: Set("secret".to_string()),
                is_active: Set(is_active),
                ..Default::default()
            }
            .insert(db)
            .await
            .expect("Failed to create test user");
        }

        let people_rows = [
            (SEEDED_PEOPLE[0], Some("172"), Some("male")),
            (SEEDED_PEOPLE[1], Some("167"), Some("n/a")),
            (SEEDED_PEOPLE[2], None, None),
        ];
        for (name, height, gender) in people_rows {
            people::ActiveModel {
                name: Set(name.to_string()),
                height: Set(height.map(str::to_string)),
                gender: Set(gender.map(str::to_string)),
                ..Default::default()
            }
            .insert(db)
            .await
            .expect("Failed to create test person");
        }

        let planet_rows = [
            (SEEDED_PLANETS[0], "desert", "200000"),
            (SEEDED_PLANETS[1], "grasslands, mountains", "2000000000"),
        ];
        for (name, terrain, population) in planet_rows {
            planet::ActiveModel {
                name: Set(Some(name.to_string())),
                terrain: Set(Some(terrain.to_string())),
                population: Set(Some(population.to_string())),
                ..Default::default()
            }
            .insert(db)
            .await
            .expect("Failed to create test planet");
        }
    }

    /// Create AppState for testing
    pub async fn setup_test_app_state() -> AppState {
        let db = setup_test_db().await;
        seed_reference_data(&db).await;
        AppState { db }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| level.parse::<Level>().ok())
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing, along with a handle to its database.
    pub async fn setup_test_app_with_db() -> (Router, DatabaseConnection) {
        let _guard = init_test_tracing();

        let state = setup_test_app_state().await;
        let db = state.db.clone();
        (create_router(state), db)
    }

    /// Create axum app for testing
    pub async fn setup_test_app() -> Router {
        setup_test_app_with_db().await.0
    }
}
