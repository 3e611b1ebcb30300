use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("{procedure}({input}): outside the domain, expected {expected}")]
    Domain {
        procedure: &'static str,
        input: String,
        expected: &'static str,
    },

    #[error("{procedure}({input}): result does not fit in 128 bits")]
    Overflow {
        procedure: &'static str,
        input: String,
    },

    #[error("{procedure}({input}): refusing to recurse past the configured limit of {limit}")]
    DepthLimit {
        procedure: &'static str,
        input: String,
        limit: u64,
    },

    #[error("{procedure}({input}): variants disagree: {detail}")]
    Mismatch {
        procedure: &'static str,
        input: String,
        detail: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn domain(procedure: &'static str, input: impl ToString, expected: &'static str) -> Self {
        AppError::Domain {
            procedure,
            input: input.to_string(),
            expected,
        }
    }

    pub fn overflow(procedure: &'static str, input: impl ToString) -> Self {
        AppError::Overflow {
            procedure,
            input: input.to_string(),
        }
    }
}
