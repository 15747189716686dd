// ============================
// crates/backend-lib/src/auth/token.rs
// ============================
//! Session token generation.
//!
//! Tokens are opaque to the client: 32 bytes of OS entropy, base64
//! URL-safe encoded without padding. All structure lives server-side in
//! the session map.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::{rngs::OsRng, RngCore};

/// 256 bits of entropy per token
const TOKEN_BYTES: usize = 32;

/// Generate a cryptographically secure session token.
pub fn generate_secure_token() -> String {
    let mut buffer = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut buffer);
    URL_SAFE_NO_PAD.encode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique_and_cookie_safe() {
        let token1 = generate_secure_token();
        let token2 = generate_secure_token();
        assert_ne!(token1, token2);

        // 32 bytes base64-encoded without padding is 43 chars
        assert_eq!(token1.len(), 43);
        assert!(token1
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }
}
