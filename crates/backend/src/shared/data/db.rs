use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const CREATE_UNIT_TABLE: &str = r#"
    CREATE TABLE a001_unit (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        number INTEGER NOT NULL,
        title TEXT NOT NULL,
        subject_name TEXT NOT NULL,
        set_id INTEGER,
        planning_json TEXT NOT NULL DEFAULT '{}',
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
"#;

const CREATE_STANDARDS_SET_TABLE: &str = r#"
    CREATE TABLE a002_standards_set (
        id INTEGER PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        subject_name TEXT NOT NULL,
        grade TEXT
    );
"#;

const CREATE_STANDARD_TABLE: &str = r#"
    CREATE TABLE a002_standard (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        set_id INTEGER NOT NULL,
        position INTEGER NOT NULL,
        code TEXT NOT NULL,
        description TEXT NOT NULL
    );
"#;

const CREATE_STANDARD_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_a002_standard_set ON a002_standard (set_id, position);";

/// Build a sqlite URL, normalizing Windows separators and drive letters
pub fn build_sqlite_url(path: &Path) -> String {
    let normalized = path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

pub async fn initialize_database(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_path.is_absolute() {
        db_path.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_path)
    };
    let db_url = build_sqlite_url(&absolute_path);
    tracing::info!("Opening database {}", absolute_path.display());
    let conn = Database::connect(&db_url).await?;

    ensure_table(&conn, "a001_unit", CREATE_UNIT_TABLE).await?;
    ensure_table(&conn, "a002_standards_set", CREATE_STANDARDS_SET_TABLE).await?;
    ensure_table(&conn, "a002_standard", CREATE_STANDARD_TABLE).await?;
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        CREATE_STANDARD_INDEX.to_string(),
    ))
    .await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

async fn ensure_table(conn: &DatabaseConnection, name: &str, ddl: &str) -> anyhow::Result<()> {
    let rows = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type='table' AND name = ?;",
            [name.into()],
        ))
        .await?;

    if rows.is_empty() {
        tracing::info!("Creating {} table", name);
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, ddl.to_string()))
            .await?;
    }
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
