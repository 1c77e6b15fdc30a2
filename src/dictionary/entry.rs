use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    pub id: i64,
    pub cyrillic: String,
    pub latin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
    pub id: i64,
    pub file_name: String,
}

/// Counts reported at the end of an import run.
///
/// `total` only counts non-blank lines, and every one of them lands in
/// exactly one of `inserted` or `skipped`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub source_name: String,
    pub source_id: i64,
    pub total: u64,
    pub inserted: u64,
    pub skipped: u64,
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Import complete:")?;
        writeln!(f, "  Source:   {} (source_id={})", self.source_name, self.source_id)?;
        writeln!(f, "  Total:    {}", self.total)?;
        writeln!(f, "  Inserted: {}", self.inserted)?;
        write!(f, "  Skipped:  {} (duplicates)", self.skipped)
    }
}
