use thiserror::Error;

/// Failure taxonomy for a weather query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The queried place does not exist in the provider's data.
    NotFound,
    /// Any other non-success response status from the provider.
    Provider,
    /// Network or parse failure before a status could be evaluated.
    Transport,
    /// The coordinate-to-name resolution step failed.
    LocationResolution,
}

/// The single flat error record crossing the client boundary.
///
/// `code` carries the provider HTTP status when one was observed,
/// `None` for transport-level failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct QueryError {
    pub kind: ErrorKind,
    pub message: String,
    pub code: Option<u16>,
}

impl QueryError {
    pub fn not_found() -> Self {
        Self {
            kind: ErrorKind::NotFound,
            message: "City not found. Please check the spelling and try again.".to_string(),
            code: Some(404),
        }
    }

    pub fn provider(status: u16) -> Self {
        Self {
            kind: ErrorKind::Provider,
            message: "Failed to fetch weather data. Please try again later.".to_string(),
            code: Some(status),
        }
    }

    /// Transport failure; falls back to a generic message when the
    /// underlying error carries none.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: ErrorKind::Transport,
            message: if message.is_empty() {
                "An unexpected error occurred".to_string()
            } else {
                message
            },
            code: None,
        }
    }

    pub fn location_status(status: u16) -> Self {
        Self {
            kind: ErrorKind::LocationResolution,
            message: "Failed to fetch weather data for your location.".to_string(),
            code: Some(status),
        }
    }

    /// Resolution failed before a status could be evaluated.
    pub fn location_transport(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: ErrorKind::LocationResolution,
            message: if message.is_empty() {
                "Failed to get weather for your location".to_string()
            } else {
                message
            },
            code: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_falls_back_to_generic_message() {
        let err = QueryError::transport("");
        assert_eq!(err.message, "An unexpected error occurred");
        assert_eq!(err.code, None);

        let err = QueryError::transport("connection reset");
        assert_eq!(err.message, "connection reset");
    }

    #[test]
    fn location_transport_falls_back_to_location_message() {
        let err = QueryError::location_transport("");
        assert_eq!(err.kind, ErrorKind::LocationResolution);
        assert_eq!(err.message, "Failed to get weather for your location");
    }

    #[test]
    fn status_errors_carry_the_code() {
        assert_eq!(QueryError::not_found().code, Some(404));
        assert_eq!(QueryError::provider(503).code, Some(503));
        assert_eq!(QueryError::location_status(500).code, Some(500));
    }
}
