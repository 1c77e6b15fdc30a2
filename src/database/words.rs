use std::io;

use rusqlite::{OptionalExtension, Transaction};
use tokio_rusqlite::{params, Connection};
use tracing::{debug, info};

use crate::config::ProvenancePolicy;
use crate::dictionary::{transliterate, ImportSummary, Word};
use crate::Result;

fn is_unique_violation(error: &rusqlite::Error) -> bool {
    matches!(
        error,
        rusqlite::Error::SqliteFailure(error, _)
            if error.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

/// Loads one word per line into the store, committing every `batch_size`
/// words.
///
/// Blank lines are ignored. A word that is already stored counts as skipped
/// and is never overwritten. Under [`ProvenancePolicy::AllSources`] a skipped
/// word is still linked to `source_id`.
pub(crate) fn insert_words<I>(
    conn: &mut rusqlite::Connection,
    lines: I,
    source_id: i64,
    batch_size: usize,
    provenance: ProvenancePolicy,
    summary: &mut ImportSummary,
) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut lines = lines;

    loop {
        let ta = conn.transaction()?;
        let processed = insert_batch(&ta, &mut lines, source_id, batch_size, provenance, summary)?;
        ta.commit()?;

        if processed < batch_size {
            break;
        }

        info!("processed {} words", summary.total);
    }

    Ok(())
}

fn insert_batch<I>(
    ta: &Transaction,
    lines: &mut I,
    source_id: i64,
    batch_size: usize,
    provenance: ProvenancePolicy,
    summary: &mut ImportSummary,
) -> Result<usize>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut word_stmt =
        ta.prepare_cached("INSERT INTO words (sr_cirilica, sr_latinica) VALUES (?1, ?2)")?;
    let mut word_source_stmt =
        ta.prepare_cached("INSERT INTO word_sources (word_id, source_id) VALUES (?1, ?2)")?;
    let mut existing_word_source_stmt = ta.prepare_cached(
        "INSERT OR IGNORE INTO word_sources (word_id, source_id)
        SELECT id, ?2 FROM words WHERE sr_cirilica = ?1",
    )?;

    let mut processed = 0;

    while processed < batch_size {
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let cyrillic = line.trim();
        if cyrillic.is_empty() {
            continue;
        }

        processed += 1;
        summary.total += 1;

        let latin = transliterate(cyrillic);

        match word_stmt.execute(params![cyrillic, latin]) {
            Ok(_) => {
                let word_id = ta.last_insert_rowid();
                word_source_stmt.execute(params![word_id, source_id])?;
                summary.inserted += 1;
            }
            Err(error) if is_unique_violation(&error) => {
                debug!(word = cyrillic, "already stored, skipping");

                if provenance == ProvenancePolicy::AllSources {
                    existing_word_source_stmt.execute(params![cyrillic, source_id])?;
                }
                summary.skipped += 1;
            }
            Err(error) => return Err(error.into()),
        }
    }

    Ok(processed)
}

pub async fn find_word(conn: &Connection, cyrillic: String) -> Result<Option<Word>> {
    let word = conn
        .call(move |conn| {
            let word = conn
                .query_row(
                    "SELECT id, sr_cirilica, sr_latinica FROM words WHERE sr_cirilica = ?1",
                    [cyrillic],
                    |row| {
                        Ok(Word {
                            id: row.get(0)?,
                            cyrillic: row.get(1)?,
                            latin: row.get(2)?,
                        })
                    },
                )
                .optional()?;

            Ok(word)
        })
        .await?;

    Ok(word)
}

pub async fn count_words(conn: &Connection) -> Result<u64> {
    let count = conn
        .call(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))?;
            Ok(count as u64)
        })
        .await?;

    Ok(count)
}
