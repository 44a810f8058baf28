use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    /// Any failure while reading the collection: transport, HTTP status or decoding.
    #[error("{message}")]
    Fetch { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render error: {message}")]
    Render { message: String },
}

impl BoardError {
    pub fn fetch(message: impl Into<String>) -> Self {
        BoardError::Fetch {
            message: message.into(),
        }
    }

    pub fn is_fetch(&self) -> bool {
        matches!(self, BoardError::Fetch { .. })
    }
}

impl From<reqwest::Error> for BoardError {
    fn from(err: reqwest::Error) -> Self {
        BoardError::fetch(err.to_string())
    }
}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        BoardError::fetch(err.to_string())
    }
}

impl From<csv::Error> for BoardError {
    fn from(err: csv::Error) -> Self {
        BoardError::Render {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_message_is_verbatim() {
        let err = BoardError::fetch("connection refused");
        assert_eq!(err.to_string(), "connection refused");
        assert!(err.is_fetch());
    }

    #[test]
    fn test_decode_error_maps_to_fetch() {
        let decode = serde_json::from_str::<Vec<u64>>("{").unwrap_err();
        let expected = decode.to_string();
        let err: BoardError = decode.into();
        assert!(err.is_fetch());
        assert_eq!(err.to_string(), expected);
    }
}
