use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

pub const DEFAULT_STORE: &str = "db/dictionary.db";
pub const DEFAULT_BATCH_SIZE: usize = 5000;

/// What to record in `word_sources` when a word is already in the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ProvenancePolicy {
    /// Only the source that first introduced a word is linked to it.
    #[default]
    FirstSource,
    /// Every source a word appears in is linked, including for skipped words.
    AllSources,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub source_path: PathBuf,
    /// Registered name of the source; the file name of `source_path` if empty.
    pub source_name: String,
    pub store_location: PathBuf,
    pub batch_size: usize,
    pub provenance: ProvenancePolicy,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::new(),
            source_name: String::new(),
            store_location: PathBuf::from(DEFAULT_STORE),
            batch_size: DEFAULT_BATCH_SIZE,
            provenance: ProvenancePolicy::default(),
        }
    }
}

impl IngestConfig {
    pub fn new<P: Into<PathBuf>, S: Into<PathBuf>>(source_path: P, store_location: S) -> Self {
        Self {
            source_path: source_path.into(),
            store_location: store_location.into(),
            ..Self::default()
        }
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    pub fn with_source_name<S: Into<String>>(mut self, source_name: S) -> Self {
        self.source_name = source_name.into();
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_provenance(mut self, provenance: ProvenancePolicy) -> Self {
        self.provenance = provenance;
        self
    }

    pub fn source_name(&self) -> String {
        if !self.source_name.is_empty() {
            return self.source_name.clone();
        }

        self.source_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source_path.to_string_lossy().into_owned())
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::InvalidConfig(String::from("batch_size must be at least 1")));
        }

        if self.source_path.as_os_str().is_empty() {
            return Err(Error::InvalidConfig(String::from("source_path is not set")));
        }

        if self.store_location.as_os_str().is_empty() {
            return Err(Error::InvalidConfig(String::from("store_location is not set")));
        }

        Ok(())
    }
}
