pub mod config;
pub mod database;
pub mod dictionary;
mod error;
pub mod ingest;

pub use config::{IngestConfig, ProvenancePolicy};
pub use error::Error;
pub use ingest::ingest;

pub type Result<T> = std::result::Result<T, Error>;
