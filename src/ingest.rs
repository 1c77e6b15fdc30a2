use std::fs::File;
use std::io::{self, BufRead, BufReader};

use tracing::info;

use crate::config::IngestConfig;
use crate::database::{self, sources, words};
use crate::dictionary::ImportSummary;
use crate::{Error, Result};

/// Imports a word list into the dictionary store.
///
/// The source file is registered (or looked up) and committed before any
/// word is read, then streamed line by line and committed in batches of
/// `config.batch_size`. Running the same import again is safe: every word is
/// skipped and the source row is reused.
pub async fn ingest(config: &IngestConfig) -> Result<ImportSummary> {
    config.validate()?;

    let file = File::open(&config.source_path).map_err(|error| match error.kind() {
        io::ErrorKind::NotFound => Error::SourceNotFound(config.source_path.clone()),
        _ => Error::IOFailed(error),
    })?;

    let conn = database::open(&config.store_location).await?;

    let source_name = config.source_name();
    let source_id = sources::upsert_source(&conn, source_name.clone()).await?;
    info!(
        source = %source_name,
        source_id,
        store = %config.store_location.display(),
        "importing words"
    );

    let mut summary = ImportSummary {
        source_name,
        source_id,
        ..ImportSummary::default()
    };
    let batch_size = config.batch_size;
    let provenance = config.provenance;

    let start = std::time::Instant::now();

    let summary = conn
        .call(move |conn| {
            let lines = BufReader::new(file).lines();
            words::insert_words(conn, lines, source_id, batch_size, provenance, &mut summary)?;
            Ok(summary)
        })
        .await?;

    conn.close().await?;

    info!(
        total = summary.total,
        inserted = summary.inserted,
        skipped = summary.skipped,
        "import finished in {:?}",
        start.elapsed()
    );

    Ok(summary)
}
