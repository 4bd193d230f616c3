//! Configuration for the traintty client
//!
//! Handles the server address and the local data directory with the
//! following precedence:
//! 1. TRAINTTY_SERVER_URL / TRAINTTY_DATA_DIR environment variables
//! 2. built-in defaults (localhost server, ~/.traintty data dir)

use std::path::PathBuf;

const DEFAULT_SERVER_URL: &str = "http://localhost:3333";
const DATA_DIR_NAME: &str = ".traintty";

/// Base URL of the trainer server.
pub fn server_url() -> String {
    std::env::var("TRAINTTY_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string())
}

/// Directory for locally persisted client state.
///
/// Priority:
/// 1. TRAINTTY_DATA_DIR env variable if set
/// 2. $HOME/.traintty
/// 3. ./.traintty as fallback
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TRAINTTY_DATA_DIR") {
        return PathBuf::from(dir);
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_is_never_empty() {
        // Should be a valid path (either the env var, ~/.traintty, or ./.traintty)
        let dir = data_dir();
        assert!(!dir.as_os_str().is_empty());
    }
}
