use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Invalid rank: {0}")]
    InvalidRank(String),

    #[error("Invalid suit: {0}")]
    InvalidSuit(char),

    #[error("Invalid card notation: {0}")]
    InvalidCardNotation(String),

    #[error("Hole cards must be exactly 2 cards, got {got}")]
    InvalidHandSize { got: usize },

    #[error("At most 5 community cards allowed, got {got}")]
    TooManyCommunityCards { got: usize },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Cannot read config {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type AdvisorResult<T> = Result<T, AdvisorError>;
