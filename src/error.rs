use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("database request failed: {0}")]
    TokioRusqliteFailed(tokio_rusqlite::Error),
    #[error("database request failed: {0}")]
    RusqliteFailed(rusqlite::Error),
    #[error("error reading file: {0}")]
    IOFailed(std::io::Error),
    #[error("error reading config file: {0}")]
    SerdeFailed(serde_json::Error),
    #[error("error when creating regex: {0}")]
    RegexFailed(regex::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<tokio_rusqlite::Error> for Error {
    fn from(error: tokio_rusqlite::Error) -> Self {
        match error {
            tokio_rusqlite::Error::Other(error) => match error.downcast::<Self>() {
                Ok(error) => *error,
                Err(error) => Self::TokioRusqliteFailed(tokio_rusqlite::Error::Other(error)),
            },
            tokio_rusqlite::Error::Rusqlite(error) => Self::RusqliteFailed(error),
            _ => Self::TokioRusqliteFailed(error),
        }
    }
}

impl From<Error> for tokio_rusqlite::Error {
    fn from(error: Error) -> Self {
        match error {
            Error::RusqliteFailed(error) => Self::Rusqlite(error),
            error => Self::Other(Box::new(error)),
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        Self::RusqliteFailed(error)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::IOFailed(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::SerdeFailed(error)
    }
}

impl From<regex::Error> for Error {
    fn from(error: regex::Error) -> Self {
        Self::RegexFailed(error)
    }
}
