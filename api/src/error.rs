pub type ApiResult<T> = Result<T, ApiError>;

/// Failure talking to the analysis backend.
///
/// The `Display` output is shown to the user verbatim.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("API Error: {status}")]
    Status { status: u16 },

    /// The request never produced a status (DNS, refused connection, CORS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// A success status whose body is not a list of words.
    #[error("malformed analysis payload: {0}")]
    Decode(String),

    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_code() {
        let err = ApiError::Status { status: 500 };
        assert_eq!(err.to_string(), "API Error: 500");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn display_prefixes_are_stable() {
        assert!(ApiError::network("x").to_string().contains("network error:"));
        assert!(ApiError::decode("x")
            .to_string()
            .contains("malformed analysis payload:"));
        assert_eq!(ApiError::decode("x").status(), None);
    }
}
