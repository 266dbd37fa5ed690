use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why an edit was vetoed. The host keeps its current text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditRejection {
    #[error("edit would leave {digits} digits, the format holds at most {max}")]
    TooManyDigits { digits: usize, max: usize },
    #[error("edit range {start}..{end} is outside text of length {len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },
    #[error("utf-16 offset {offset} falls inside a surrogate pair")]
    SplitSurrogate { offset: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("year {0} does not fit the four digit year segment")]
    YearOutOfRange(i32),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("unsupported config extension: {}", .0.display())]
    UnsupportedExtension(PathBuf),
}
