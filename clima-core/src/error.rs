use thiserror::Error;

/// Coarse failure class reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Network,
    Decode,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Network => f.write_str("network"),
            ErrorKind::Decode => f.write_str("decode"),
        }
    }
}

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("failed to reach the weather endpoint: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-success status. The body is kept for diagnostics only, never decoded.
    #[error("weather endpoint answered with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("weather response body was empty")]
    EmptyBody,

    #[error("failed to parse weather JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("weather response contained no conditions")]
    NoConditions,
}

impl WeatherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WeatherError::Transport(_) | WeatherError::Status { .. } => ErrorKind::Network,
            WeatherError::EmptyBody | WeatherError::Malformed(_) | WeatherError::NoConditions => {
                ErrorKind::Decode
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_counts_as_network() {
        let err = WeatherError::Status { status: 404, body: "city not found".into() };
        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn body_problems_count_as_decode() {
        assert_eq!(WeatherError::EmptyBody.kind(), ErrorKind::Decode);
        assert_eq!(WeatherError::NoConditions.kind(), ErrorKind::Decode);

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(WeatherError::Malformed(json_err).kind(), ErrorKind::Decode);
    }
}
