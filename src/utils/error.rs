use thiserror::Error;

#[derive(Error, Debug)]
pub enum DuckError {
    #[error("undefined capability `{capability}` for {receiver}")]
    CapabilityMissing { receiver: String, capability: String },

    #[error("capability `{capability}` on {receiver} did not produce a boolean")]
    CapabilityShape { receiver: String, capability: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DuckError>;
