//! Access token lookup.
//!
//! The token file is written by whatever performed the OAuth login. Only the
//! access token is read; it is never refreshed here.

use std::path::Path;

use serde::Deserialize;

use super::error::TdaError;

#[derive(Debug, Deserialize)]
struct TokenFile {
    #[serde(default)]
    token: Option<TokenBody>,
    #[serde(default)]
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenBody {
    #[serde(default)]
    access_token: Option<String>,
}

/// Read the access token from a JSON token file.
///
/// Accepts `{"token": {"access_token": ...}}` (with a creation timestamp
/// alongside) as well as a bare `{"access_token": ...}`.
pub fn read_access_token(path: &Path) -> Result<String, TdaError> {
    let token_error = |message: String| TdaError::Token {
        path: path.display().to_string(),
        message,
    };

    let contents = std::fs::read_to_string(path).map_err(|e| token_error(e.to_string()))?;
    let file: TokenFile =
        serde_json::from_str(&contents).map_err(|e| token_error(e.to_string()))?;

    file.token
        .and_then(|body| body.access_token)
        .or(file.access_token)
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| token_error("no access_token".to_string()))
}
