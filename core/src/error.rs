use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown placeholder '{{{token}}}' in template: {template}")]
    UnknownPlaceholder { token: String, template: String },

    #[error("No value supplied for required placeholder '{{{token}}}'")]
    MissingPlaceholder { token: &'static str },

    #[error("Malformed template at byte {position}: {template}")]
    MalformedTemplate { position: usize, template: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GenError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

pub type GenResult<T> = Result<T, GenError>;
