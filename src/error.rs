use std::num::{ParseFloatError, ParseIntError};
use std::path::{Path, PathBuf};

use thiserror::Error as ThisError;

use crate::types::{CityId, Edge};

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("cannot access {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read line {line} of {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line} ({text:?}): {reason}", .path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        text: String,
        #[source]
        reason: LineError,
    },
    #[error("edge {edge} references city {city}, which is not in the city map")]
    UnknownCity { city: CityId, edge: Edge },
    #[error("render failed: {0}")]
    Render(String),
    #[error("logger init failed: {0}")]
    Logger(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn read(path: &Path, line: usize, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            line,
            source,
        }
    }

    pub fn render(message: impl std::fmt::Display) -> Self {
        Self::Render(message.to_string())
    }
}

/// Why a single input line was rejected.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum LineError {
    #[error("expected {0}")]
    Shape(&'static str),
    #[error("invalid integer {token:?}: {source}")]
    Integer {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid number {token:?}: {source}")]
    Number {
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

impl LineError {
    pub(crate) fn at(self, path: &Path, line: usize, text: &str) -> Error {
        Error::MalformedLine {
            path: path.to_path_buf(),
            line,
            text: text.to_string(),
            reason: self,
        }
    }
}
