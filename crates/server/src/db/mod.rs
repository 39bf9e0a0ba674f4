use std::{
    ffi::c_int,
    sync::Once,
    time::{Duration, Instant},
};

use deadpool_sqlite::{Config, Hook, HookError, Pool, Runtime};
use include_dir::{include_dir, Dir};
use rusqlite::{Connection, OpenFlags, TransactionBehavior};
use rusqlite_migration::{Migrations, SchemaVersion};
use shared::api::error::{Nothing, ServerError};
use tracing::{debug, error, info, instrument, span, trace, warn, Level};

mod database_connection;
pub use database_connection::*;

static MIGRATIONS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/migrations");

fn log_statement_timing(statement: &str, duration: Duration) {
    trace!(target: "workout_db::timing", ?duration, statement);
}

fn log_statement(statement: &str) {
    trace!(target: "workout_db::statement", statement);
}

/// Forwards sqlite's own diagnostics. Extended result codes are reduced to
/// their primary code (https://www.sqlite.org/rescode.html).
fn forward_sqlite_log(code: c_int, msg: &str) {
    use rusqlite::ffi;
    let err_code = ffi::Error::new(code);

    match code & 0xff {
        ffi::SQLITE_NOTICE => info!(target: "workout_db::sqlite", msg, %err_code),
        ffi::SQLITE_WARNING => warn!(target: "workout_db::sqlite", msg, %err_code),
        _ => error!(target: "workout_db::sqlite", msg, %err_code),
    };
}

pub fn get_migrations() -> Result<Migrations<'static>, ServerError<Nothing>> {
    Migrations::from_directory(&MIGRATIONS_DIR)
        .map_err(|e| ServerError::other(format!("Migrations::from_directory: {e:?}")))
}

#[instrument(skip(conn))]
pub fn configure_new_connection(conn: &mut Connection) -> Result<(), ServerError<Nothing>> {
    run_pragmas(conn)?;

    if cfg!(debug_assertions) {
        conn.trace(Some(log_statement));
    } else {
        conn.profile(Some(log_statement_timing));
    }

    Ok(())
}

#[instrument(skip(conn))]
pub fn run_pragmas(conn: &Connection) -> Result<(), ServerError<Nothing>> {
    // Reports the resulting mode as a row
    let mode: String = conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
    trace!(%mode, "journal mode");
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    Ok(())
}

fn schema_version(
    migrations: &Migrations<'_>,
    conn: &Connection,
) -> Result<usize, ServerError<Nothing>> {
    let version = migrations
        .current_version(conn)
        .map_err(|e| ServerError::other(format!("Migrations::current_version: {e:?}")))?;

    match version {
        SchemaVersion::Inside(n) => Ok(n.into()),
        SchemaVersion::Outside(n) => Err(ServerError::other(format!(
            "Schema version {n} is outside of known schema migrations. Manual intervention required"
        ))),
        SchemaVersion::NoneSet => Ok(0),
    }
}

/// Brings the schema up to date. Returns how many migrations ran.
#[instrument]
pub fn run_migrations(connection_string: &str) -> Result<usize, ServerError<Nothing>> {
    static LOG_HOOK: Once = Once::new();
    let mut hook_result = Ok(());
    LOG_HOOK.call_once(|| unsafe {
        hook_result = rusqlite::trace::config_log(Some(forward_sqlite_log));
    });
    // sqlite rejects the hook once any connection has opened
    if let Err(e) = hook_result {
        warn!(%e, "sqlite log hook not installed");
    }

    let open_flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX
        | OpenFlags::SQLITE_OPEN_CREATE;

    let mut conn = Connection::open_with_flags(connection_string, open_flags)?;
    configure_new_connection(&mut conn)?;

    debug!("Checking DB is writable");
    conn.transaction_with_behavior(TransactionBehavior::Exclusive)?;

    let migrations = get_migrations()?;
    let ran = {
        let _span = span!(Level::INFO, "Running migrations").entered();

        let initial_version = schema_version(&migrations, &conn)?;
        migrations
            .to_latest(&mut conn)
            .map_err(|e| ServerError::other(format!("Migrations::to_latest: {e:?}")))?;
        let final_version = schema_version(&migrations, &conn)?;

        final_version - initial_version
    };

    close_database(conn)?;

    Ok(ran)
}

/// Builds the connection pool. Every pooled connection gets the same pragmas
/// and tracing hooks as the migration connection.
pub fn create_pool(connection_string: &str) -> Result<Pool, ServerError<Nothing>> {
    Config::new(connection_string)
        .builder(Runtime::Tokio1)
        .map_err(|e| ServerError::other(format!("deadpool config: {e:?}")))?
        .post_create(Hook::async_fn(|object, _| {
            Box::pin(async move {
                object
                    .interact(configure_new_connection)
                    .await
                    .map_err(|e| HookError::Message(e.to_string()))?
                    .map_err(|e| HookError::Message(e.to_string()))?;
                Ok(())
            })
        }))
        .build()
        .map_err(|e| ServerError::other(format!("deadpool build: {e:?}")))
}

/// Refreshes the query planner statistics and rebuilds the file
#[instrument(skip(conn))]
pub fn compact_database(conn: &Connection) -> Result<Duration, ServerError<Nothing>> {
    let start = Instant::now();
    conn.pragma_update(None, "analysis_limit", 400)?;
    conn.pragma_update(None, "optimize", "")?;
    conn.execute_batch("VACUUM")?;
    Ok(start.elapsed())
}

#[instrument(skip(conn))]
pub fn close_database(conn: Connection) -> Result<(), ServerError<Nothing>> {
    let took = compact_database(&conn)?;
    info!(seconds = took.as_secs_f32(), "compacted database");

    conn.close().map_err(|(_, e)| e)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_migrations_are_valid() {
        get_migrations().unwrap().validate().unwrap();
    }

    #[test]
    fn test_seed_catalog_is_shared() {
        let mut conn = Connection::open_in_memory().unwrap();
        run_pragmas(&conn).unwrap();
        get_migrations().unwrap().to_latest(&mut conn).unwrap();

        let owned: i64 = conn
            .query_row("SELECT COUNT(*) FROM exercise WHERE owner IS NOT NULL", [], |r| r.get(0))
            .unwrap();
        let shared: i64 = conn
            .query_row("SELECT COUNT(*) FROM exercise WHERE owner IS NULL", [], |r| r.get(0))
            .unwrap();
        assert_eq!(owned, 0);
        assert!(shared > 0);
    }

    #[test]
    fn test_migrations_run_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workouts.sqlite");
        let path = path.to_str().unwrap();

        assert_eq!(run_migrations(path).unwrap(), 2);
        assert_eq!(run_migrations(path).unwrap(), 0);

        let conn = Connection::open(path).unwrap();
        let free_pages: i64 = conn.pragma_query_value(None, "freelist_count", |r| r.get(0)).unwrap();
        assert_eq!(free_pages, 0);
    }

    #[test]
    fn test_compact_after_cascading_delete() {
        let mut conn = Connection::open_in_memory().unwrap();
        run_pragmas(&conn).unwrap();
        get_migrations().unwrap().to_latest(&mut conn).unwrap();

        conn.execute(
            "INSERT INTO workout (owner, date, created_at, updated_at) \
             VALUES (1, '2025-03-01', '2025-03-01T00:00:00Z', '2025-03-01T00:00:00Z')",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO workout_entry (workout_id, exercise_id, sets, reps, weight) VALUES (1, 1, 3, 10, 5000)",
            [],
        )
        .unwrap();
        conn.execute("DELETE FROM workout", []).unwrap();

        compact_database(&conn).unwrap();
        let left: i64 = conn.query_row("SELECT COUNT(*) FROM workout_entry", [], |r| r.get(0)).unwrap();
        assert_eq!(left, 0);
    }

    #[test]
    fn test_one_workout_per_day() {
        let mut conn = Connection::open_in_memory().unwrap();
        run_pragmas(&conn).unwrap();
        get_migrations().unwrap().to_latest(&mut conn).unwrap();

        let insert = "INSERT INTO workout (owner, date, created_at, updated_at) \
                      VALUES (1, '2025-03-01', '2025-03-01T00:00:00Z', '2025-03-01T00:00:00Z')";
        conn.execute(insert, []).unwrap();
        assert!(conn.execute(insert, []).is_err());
    }
}
