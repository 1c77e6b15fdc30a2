use std::fs;
use std::path::{Path, PathBuf};

use recnik::database::{self, sources, words};
use recnik::{ingest, Error, IngestConfig, ProvenancePolicy};

fn write_source(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, lines.join("\n")).unwrap();
    path
}

#[tokio::test]
async fn blank_lines_and_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("db").join("dictionary.db");
    let source = write_source(dir.path(), "sr_cirilica.txt", &["мама", "", "тата", "мама"]);

    let summary = ingest(&IngestConfig::new(&source, &store)).await.unwrap();

    assert_eq!(summary.source_name, "sr_cirilica.txt");
    assert_eq!(summary.total, 3);
    assert_eq!(summary.inserted, 2);
    assert_eq!(summary.skipped, 1);

    let conn = database::open(&store).await.unwrap();
    assert_eq!(words::count_words(&conn).await.unwrap(), 2);

    let mama = words::find_word(&conn, String::from("мама")).await.unwrap().unwrap();
    let tata = words::find_word(&conn, String::from("тата")).await.unwrap().unwrap();
    assert_eq!(mama.latin, "mama");
    assert_eq!(tata.latin, "tata");
}

#[tokio::test]
async fn second_run_skips_everything() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("dictionary.db");
    let source = write_source(
        dir.path(),
        "words.txt",
        &["  Љубав ", "ниш", "\tџеп", "ниш", "", "Њива\r"],
    );
    let config = IngestConfig::new(&source, &store).with_batch_size(2);

    let first = ingest(&config).await.unwrap();
    assert_eq!((first.total, first.inserted, first.skipped), (5, 4, 1));

    let second = ingest(&config).await.unwrap();
    assert_eq!(second.source_id, first.source_id);
    assert_eq!(second.total, 5);
    assert_eq!(second.inserted, 0);
    assert_eq!(second.skipped, second.total);

    let conn = database::open(&store).await.unwrap();
    assert_eq!(words::count_words(&conn).await.unwrap(), 4);
    assert_eq!(sources::list_sources(&conn).await.unwrap().len(), 1);

    let ljubav = words::find_word(&conn, String::from("Љубав")).await.unwrap().unwrap();
    assert_eq!(ljubav.latin, "Ljubav");
    let njiva = words::find_word(&conn, String::from("Њива")).await.unwrap().unwrap();
    assert_eq!(njiva.latin, "Njiva");
}

#[tokio::test]
async fn shared_word_keeps_first_source_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("dictionary.db");
    let a = write_source(dir.path(), "a.txt", &["река", "мост"]);
    let b = write_source(dir.path(), "b.txt", &["река", "град"]);

    ingest(&IngestConfig::new(&a, &store)).await.unwrap();
    let summary = ingest(&IngestConfig::new(&b, &store)).await.unwrap();
    assert_eq!((summary.inserted, summary.skipped), (1, 1));

    let conn = database::open(&store).await.unwrap();
    let linked = sources::sources_for_word(&conn, String::from("река")).await.unwrap();
    let names: Vec<&str> = linked.iter().map(|s| s.file_name.as_str()).collect();
    assert_eq!(names, vec!["a.txt"]);

    let counts: Vec<(String, u64)> = sources::list_sources(&conn)
        .await
        .unwrap()
        .into_iter()
        .map(|(source, count)| (source.file_name, count))
        .collect();
    assert_eq!(
        counts,
        vec![(String::from("a.txt"), 2), (String::from("b.txt"), 1)]
    );
}

#[tokio::test]
async fn shared_word_links_every_source_when_asked() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("dictionary.db");
    let a = write_source(dir.path(), "a.txt", &["река", "мост"]);
    let b = write_source(dir.path(), "b.txt", &["река", "град"]);

    for source in [&a, &b, &b] {
        let config =
            IngestConfig::new(source, &store).with_provenance(ProvenancePolicy::AllSources);
        let summary = ingest(&config).await.unwrap();
        assert_eq!(summary.total, summary.inserted + summary.skipped);
    }

    let conn = database::open(&store).await.unwrap();
    let linked = sources::sources_for_word(&conn, String::from("река")).await.unwrap();
    let names: Vec<&str> = linked.iter().map(|s| s.file_name.as_str()).collect();
    assert_eq!(names, vec!["a.txt", "b.txt"]);
    assert_eq!(words::count_words(&conn).await.unwrap(), 3);
}

#[tokio::test]
async fn custom_source_name() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("dictionary.db");
    let source = write_source(dir.path(), "export-2024.txt", &["шума"]);

    let config = IngestConfig::new(&source, &store).with_source_name("sr_cirilica_262000.txt");
    let summary = ingest(&config).await.unwrap();
    assert_eq!(summary.source_name, "sr_cirilica_262000.txt");

    let conn = database::open(&store).await.unwrap();
    let linked = sources::sources_for_word(&conn, String::from("шума")).await.unwrap();
    assert_eq!(linked[0].file_name, "sr_cirilica_262000.txt");
    assert_eq!(linked[0].id, summary.source_id);
}

#[tokio::test]
async fn missing_source_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = IngestConfig::new(dir.path().join("nope.txt"), dir.path().join("d.db"));

    assert!(matches!(
        ingest(&config).await,
        Err(Error::SourceNotFound(_))
    ));
}

#[tokio::test]
async fn invalid_utf8_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("dictionary.db");
    let source = dir.path().join("latin1.txt");
    fs::write(&source, b"\xe8a\xe8a\n").unwrap();

    assert!(matches!(
        ingest(&IngestConfig::new(&source, &store)).await,
        Err(Error::IOFailed(_))
    ));

    // the source row was committed before the words
    let conn = database::open(&store).await.unwrap();
    assert_eq!(sources::list_sources(&conn).await.unwrap().len(), 1);
    assert_eq!(words::count_words(&conn).await.unwrap(), 0);
}
