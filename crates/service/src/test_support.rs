use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use models::db::{connect, migrate};

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// A migrated connection, or `None` when no database is configured.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(None);
    }
    MIGRATED
        .get_or_try_init(|| async {
            let db = connect().await?;
            migrate(&db).await?;
            Ok::<(), anyhow::Error>(())
        })
        .await?;

    // Fresh connection for the current test's runtime
    Ok(Some(connect().await?))
}
