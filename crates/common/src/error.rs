use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least one hole is required")]
    NoHoles,
    #[error("round length must be greater than zero")]
    EmptyRound,
    #[error("peep duration bounds must not both be zero")]
    EmptyPeep,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("score store is unavailable: {0}")]
    Unavailable(String),
    #[error("score store rejected write of key `{key}`: {reason}")]
    Rejected { key: String, reason: String },
    #[error("stored value for key `{key}` is not a score: {value:?}")]
    Corrupt { key: String, value: String },
}
