use thiserror::Error;

/// Configuration errors raised when constructing a shuffler.
#[derive(Debug, Error)]
pub enum ShuffleError {
    #[error("participant roster is empty")]
    EmptyRoster,

    #[error("target group size must be at least 2, got {0}")]
    GroupSizeTooSmall(usize),
}
