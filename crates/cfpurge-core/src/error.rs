use std::error::Error;
use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serde error")]
    Serde(#[from] serde_json::Error),
    #[error("Some required options are missing! ({})", .0.join(", "))]
    MissingOptions(Vec<String>),
    #[error("invalid header: {0}")]
    InvalidHeader(String),
    #[error("network error")]
    Network(#[from] reqwest::Error),
    #[error("malformed response body (status {status})")]
    MalformedResponse {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

impl CoreError {
    /// HTTP status of the provider response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::MalformedResponse { status, .. } => Some(*status),
            Self::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Renders an error together with every `source()` beneath it.
pub fn format_error_chain(error: &dyn Error) -> String {
    let mut chain = vec![error.to_string()];
    let mut source = error.source();

    while let Some(err) = source {
        chain.push(format!("  caused by: {}", err));
        source = err.source();
    }

    chain.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_options_lists_every_field() {
        let err = CoreError::MissingOptions(vec!["token".into(), "zoneId".into()]);
        assert_eq!(
            err.to_string(),
            "Some required options are missing! (token, zoneId)"
        );
    }

    #[test]
    fn error_chain_names_each_cause_once() {
        let cause = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let detail = cause.to_string();
        let chain = format_error_chain(&CoreError::from(cause));

        assert!(chain.starts_with("serde error\n  caused by: "));
        assert_eq!(chain.matches(detail.as_str()).count(), 1);
    }

    #[test]
    fn malformed_response_keeps_status() {
        let cause = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = CoreError::MalformedResponse {
            status: 502,
            source: cause,
        };

        assert_eq!(err.status(), Some(502));
        assert!(format_error_chain(&err).starts_with("malformed response body (status 502)"));
        assert_eq!(CoreError::InvalidHeader("x".into()).status(), None);
    }
}
