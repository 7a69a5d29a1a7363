use thiserror::Error;

/// Failures talking to the trivia provider.
///
/// Payloads are rendered strings so the error can travel through the event
/// channel and sit in session state for display.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("provider rejected request: {} (response code {code})", describe_code(.code))]
    Rejected { code: u32 },

    #[error("could not build HTTP client: {0}")]
    Client(String),
}

/// Short description of an Open Trivia DB response code.
fn describe_code(code: &u32) -> &'static str {
    match code {
        1 => "no results for this query",
        2 => "invalid parameter",
        3 => "session token not found",
        4 => "session token exhausted",
        5 => "rate limited, try again shortly",
        _ => "unknown response code",
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Malformed(e.to_string())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Malformed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_names_the_code() {
        let err = FetchError::Rejected { code: 5 };
        assert_eq!(
            err.to_string(),
            "provider rejected request: rate limited, try again shortly (response code 5)"
        );
        assert_eq!(
            FetchError::Rejected { code: 42 }.to_string(),
            "provider rejected request: unknown response code (response code 42)"
        );
    }
}
