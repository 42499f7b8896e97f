use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::error::{GhostError, Result};
use crate::token::{self, Claims, Header};

/// AdminKey is a parsed Ghost Admin API key of the form `<id>:<hex secret>`.
#[derive(Clone)]
pub struct AdminKey {
    id: String,
    secret: Vec<u8>,
}

impl AdminKey {
    /// Parse an admin key as shown in the Ghost integrations screen
    ///
    /// # Arguments
    /// * `key` - The key string, `<id>:<hex-encoded secret>`
    pub fn parse(key: &str) -> Result<Self> {
        let mut parts = key.split(':');
        let (id, secret) = match (parts.next(), parts.next(), parts.next()) {
            (Some(id), Some(secret), None) if !id.is_empty() && !secret.is_empty() => {
                (id, secret)
            }
            _ => return Err(GhostError::InvalidKeyFormat),
        };

        let secret = hex::decode(secret)?;

        Ok(AdminKey {
            id: id.to_string(),
            secret,
        })
    }

    /// Key identifier, sent as the token's `kid` header
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Generate a token issued now
    pub fn generate_token(&self) -> Result<String> {
        self.generate_token_at(Utc::now())
    }

    /// Generate a token issued at `now`, valid for [`token::TOKEN_LIFETIME`]
    pub fn generate_token_at(&self, now: DateTime<Utc>) -> Result<String> {
        token::sign(&Header::new(&self.id), &Claims::issued_at(now), &self.secret)
    }

    /// Verify a token against this key's secret
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<token::DecodedToken> {
        token::verify(token, &self.secret, now)
    }
}

impl FromStr for AdminKey {
    type Err = GhostError;

    fn from_str(s: &str) -> Result<Self> {
        AdminKey::parse(s)
    }
}

// Keep the secret out of logs
impl std::fmt::Debug for AdminKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminKey")
            .field("id", &self.id)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Generate a fresh admin token from a `<id>:<hex secret>` key string.
///
/// The key is parsed on every call and the token is bound to the current time.
pub fn generate_token(key: &str) -> Result<String> {
    AdminKey::parse(key)?.generate_token()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const KEY: &str = "abc123:68656c6c6f";

    #[test]
    fn test_parse_valid_key() {
        let key = AdminKey::parse(KEY).unwrap();
        assert_eq!(key.id(), "abc123");
        assert_eq!(key.secret, b"hello");
    }

    #[test]
    fn test_parse_malformed_keys() {
        for bad in ["", "abc123", ":", "abc123:", ":68656c6c6f", "a:b:c", "abc:6865:"] {
            let err = AdminKey::parse(bad).unwrap_err();
            assert!(
                matches!(err, GhostError::InvalidKeyFormat),
                "expected InvalidKeyFormat for {:?}, got {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_parse_invalid_hex() {
        assert!(matches!(
            AdminKey::parse("abc123:zz").unwrap_err(),
            GhostError::KeyDecode(_)
        ));
        // odd length
        assert!(matches!(
            AdminKey::parse("abc123:686").unwrap_err(),
            GhostError::KeyDecode(_)
        ));
    }

    #[test]
    fn test_from_str() {
        let key: AdminKey = KEY.parse().unwrap();
        assert_eq!(key.id(), "abc123");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let key = AdminKey::parse(KEY).unwrap();
        let debug = format!("{:?}", key);
        assert!(debug.contains("abc123"));
        assert!(!debug.contains("hello"));
        assert!(!debug.contains("68656c6c6f"));
    }

    #[test]
    fn test_generate_token_claims() {
        let token = generate_token(KEY).unwrap();
        let decoded = token::decode_unverified(&token).unwrap();

        assert_eq!(token.split('.').count(), 3);
        assert_eq!(decoded.header.kid, "abc123");
        assert_eq!(decoded.header.alg, "HS256");
        assert_eq!(decoded.claims.aud, "/admin/");
        assert_eq!(decoded.claims.exp - decoded.claims.iat, 300);
        assert!((decoded.claims.iat - Utc::now().timestamp()).abs() <= 1);
    }

    #[test]
    fn test_tokens_one_second_apart() {
        let key = AdminKey::parse(KEY).unwrap();
        let first_at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let second_at = Utc.timestamp_opt(1_700_000_001, 0).unwrap();

        let first = key.generate_token_at(first_at).unwrap();
        let second = key.generate_token_at(second_at).unwrap();
        assert_ne!(first, second);

        assert!(key.verify(&first, second_at).is_ok());
        assert!(key.verify(&second, second_at).is_ok());
    }

    #[test]
    fn test_generate_token_propagates_key_errors() {
        assert!(generate_token("no-separator").unwrap_err().is_key_error());
        assert!(generate_token("abc123:xyz0").unwrap_err().is_key_error());
    }
}
