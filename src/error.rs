use thiserror::Error;

/// Shown when a failure carries no message of its own.
pub const FALLBACK_MESSAGE: &str = "unexpected error";

#[derive(Debug, Error, PartialEq)]
pub enum LoadError {
    /// Upstream answered with a status outside `2xx`.
    #[error("HTTP {0}")]
    Http(u16),

    /// Network failure or a body that is not a result page.
    #[error("{0}")]
    Transport(String),
}

impl LoadError {
    pub fn transport(message: impl ToString) -> LoadError {
        let message = message.to_string();

        if message.trim().is_empty() {
            return LoadError::Transport(FALLBACK_MESSAGE.to_string());
        }

        LoadError::Transport(message)
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        LoadError::transport(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::transport(err)
    }
}

#[cfg(test)]
mod tests {
    use super::{LoadError, FALLBACK_MESSAGE};

    #[test]
    fn http_error_shows_status() -> anyhow::Result<()> {
        assert_eq!("HTTP 404", LoadError::Http(404).to_string());

        Ok(())
    }

    #[test]
    fn blank_message_falls_back() -> anyhow::Result<()> {
        let err = LoadError::transport("  ");

        assert_eq!(FALLBACK_MESSAGE, err.to_string());

        Ok(())
    }

    #[test]
    fn parse_error_keeps_message() -> anyhow::Result<()> {
        let err: LoadError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();

        assert!(err.to_string().contains("EOF"));

        Ok(())
    }
}
