use std::path::Path;

use tokio::fs;
use tokio_rusqlite::Connection;

use crate::Result;

pub mod sources;
pub mod words;

async fn init(conn: &Connection) -> tokio_rusqlite::Result<()> {
    conn.call(|conn| {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
                PRAGMA journal_size_limit = 6144000;
                PRAGMA foreign_keys = ON;",
        )?;

        Ok(())
    })
    .await
}

async fn create_tables(conn: &Connection) -> tokio_rusqlite::Result<()> {
    conn.call(|conn| {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS sources (
                id INTEGER PRIMARY KEY,
                file_name TEXT UNIQUE NOT NULL
            )",
            (),
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS words (
                id INTEGER PRIMARY KEY,
                sr_cirilica TEXT UNIQUE NOT NULL,
                sr_latinica TEXT NOT NULL
            )",
            (),
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS word_sources (
                word_id INTEGER NOT NULL REFERENCES words(id),
                source_id INTEGER NOT NULL REFERENCES sources(id),
                PRIMARY KEY (word_id, source_id)
            )",
            (),
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS word_sources_source_index ON word_sources(source_id)",
            (),
        )?;

        Ok(())
    })
    .await
}

/// Opens the dictionary store, creating the file, its directory and the
/// schema when they do not exist yet.
pub async fn open<P: AsRef<Path>>(store_location: P) -> Result<Connection> {
    let store_location = store_location.as_ref();

    if let Some(parent) = store_location.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let conn = Connection::open(store_location).await?;

    init(&conn).await?;
    create_tables(&conn).await?;

    Ok(conn)
}
