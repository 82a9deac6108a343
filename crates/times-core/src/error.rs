use crate::width::Width;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimesError {
    #[error("unknown width '{0}': expected one of i8, i16, i32, i64")]
    UnknownWidth(String),

    #[error("count {value} does not fit in {width}")]
    CountOutOfRange { width: Width, value: String },

    #[error("sample {value} is outside the {width} range")]
    InvalidSample { width: Width, value: i64 },

    #[error("no samples configured for {0}")]
    EmptySamples(Width),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, TimesError>;
