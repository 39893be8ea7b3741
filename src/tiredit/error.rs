use thiserror::Error;

#[derive(Error, Debug)]
pub enum TireditError {
    #[error("Malformed line {line} in def file (more than one '=')")]
    MalformedLine { line: usize },

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Entry index {index} out of range (have {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Required key {0} is missing from the def file")]
    MissingRequiredKey(&'static str),

    #[error("Value for {key} at ring {ring} is not numeric")]
    NonNumericSample { key: String, ring: usize },

    #[error("{key} carries {found} values but the model has {expected} rings")]
    TooFewSamples {
        key: String,
        expected: usize,
        found: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TireditError>;
