use tokio_rusqlite::{params, Connection};

use crate::dictionary::Source;
use crate::Result;

/// Registers `file_name` if it is new and returns its id either way.
pub(crate) fn upsert(conn: &rusqlite::Connection, file_name: &str) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT OR IGNORE INTO sources (file_name) VALUES (?1)",
        [file_name],
    )?;

    conn.query_row(
        "SELECT id FROM sources WHERE file_name = ?1",
        [file_name],
        |row| row.get(0),
    )
}

pub async fn upsert_source(conn: &Connection, file_name: String) -> Result<i64> {
    let id = conn
        .call(move |conn| Ok(upsert(conn, &file_name)?))
        .await?;

    Ok(id)
}

/// Sources a word has been linked to, oldest first.
pub async fn sources_for_word(conn: &Connection, cyrillic: String) -> Result<Vec<Source>> {
    let sources = conn
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT sources.id, file_name FROM sources
                JOIN word_sources ON sources.id = source_id
                JOIN words ON words.id = word_id
                WHERE sr_cirilica = ?1
                ORDER BY sources.id",
            )?;

            let rows = stmt.query_map(params![cyrillic], |row| {
                Ok(Source {
                    id: row.get(0)?,
                    file_name: row.get(1)?,
                })
            })?;

            let mut sources = Vec::new();
            for source in rows {
                sources.push(source?);
            }

            Ok(sources)
        })
        .await?;

    Ok(sources)
}

/// Every registered source with the number of words linked to it.
pub async fn list_sources(conn: &Connection) -> Result<Vec<(Source, u64)>> {
    let sources = conn
        .call(|conn| {
            let mut stmt = conn.prepare(
                "SELECT sources.id, file_name, COUNT(word_id) FROM sources
                LEFT JOIN word_sources ON sources.id = source_id
                GROUP BY sources.id
                ORDER BY sources.id",
            )?;

            let rows = stmt.query_map([], |row| {
                let source = Source {
                    id: row.get(0)?,
                    file_name: row.get(1)?,
                };
                let count: i64 = row.get(2)?;

                Ok((source, count as u64))
            })?;

            let mut sources = Vec::new();
            for source in rows {
                sources.push(source?);
            }

            Ok(sources)
        })
        .await?;

    Ok(sources)
}
