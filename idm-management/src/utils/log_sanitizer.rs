//! Log sanitization utilities
//!
//! Response bodies can carry verification records and request bodies can be
//! large, so logged payloads are capped, and access tokens are never written out whole.

/// Maximum number of bytes of a payload included in log output.
const TRUNCATE_LIMIT: usize = 256;
/// Number of trailing token characters kept by [`redact_token`].
const TOKEN_TAIL: usize = 4;

/// Truncate a payload for logging, never splitting a UTF-8 character.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }

    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

/// Masks an access token, keeping only its last few characters.
pub fn redact_token(token: &str) -> String {
    let count = token.chars().count();
    if count <= TOKEN_TAIL * 2 {
        return "***".to_string();
    }
    let tail: String = token.chars().skip(count - TOKEN_TAIL).collect();
    format!("***{tail}")
}
