use thiserror::Error;

/// Failure while reading one turn of the text protocol.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("input ended before a new turn started")]
    EndOfInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected {expected}")]
    MissingField { line: usize, expected: &'static str },

    #[error("line {line}: '{value}' is not a valid number")]
    InvalidNumber { line: usize, value: String },

    #[error("'{0}' is not a tile, expected 4 characters of '0' or '1'")]
    InvalidTile(String),

    #[error("'{0}' is not a direction")]
    InvalidDirection(String),

    #[error("quest for item '{name}' of player {owner} does not match any item")]
    UnknownQuest { name: String, owner: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config: {0}")]
    Json(#[from] serde_json::Error),
}
