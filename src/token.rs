use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::time::Duration;

use crate::error::{GhostError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Audience claim expected by the Admin API
pub const AUDIENCE: &str = "/admin/";

/// Validity window of a generated token
pub const TOKEN_LIFETIME: Duration = Duration::from_secs(5 * 60);

/// JWS algorithm identifier for HMAC-SHA256
pub const ALGORITHM: &str = "HS256";

/// JWS `typ` header value
pub const TOKEN_TYPE: &str = "JWT";

/// Token header. `kid` selects which admin key secret the server verifies with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub alg: String,
    pub kid: String,
    pub typ: String,
}

impl Header {
    /// Create an HS256 header for the given key id
    pub fn new(kid: impl Into<String>) -> Self {
        Header {
            alg: ALGORITHM.to_string(),
            kid: kid.into(),
            typ: TOKEN_TYPE.to_string(),
        }
    }
}

/// Signed claim set of an admin token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Audience, always [`AUDIENCE`] for generated tokens
    pub aud: String,
    /// Expiry, unix seconds
    pub exp: i64,
    /// Issued at, unix seconds
    pub iat: i64,
}

impl Claims {
    /// Claims issued at `now` and expiring [`TOKEN_LIFETIME`] later
    pub fn issued_at(now: DateTime<Utc>) -> Self {
        let iat = now.timestamp();
        Claims {
            aud: AUDIENCE.to_string(),
            exp: iat + TOKEN_LIFETIME.as_secs() as i64,
            iat,
        }
    }
}

/// Header and claims read back out of a token string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedToken {
    pub header: Header,
    pub claims: Claims,
}

fn encode_segment<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_vec(value)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

fn mac_for(secret: &[u8], signing_input: &str) -> Result<HmacSha256> {
    let mut mac =
        HmacSha256::new_from_slice(secret).map_err(|e| GhostError::Signing(e.to_string()))?;
    mac.update(signing_input.as_bytes());
    Ok(mac)
}

/// Sign `claims` with HMAC-SHA256 and return the compact
/// `header.payload.signature` form.
pub fn sign(header: &Header, claims: &Claims, secret: &[u8]) -> Result<String> {
    let header_segment = encode_segment(header).map_err(|e| GhostError::Signing(e.to_string()))?;
    let claims_segment = encode_segment(claims).map_err(|e| GhostError::Signing(e.to_string()))?;
    let signing_input = format!("{}.{}", header_segment, claims_segment);

    let signature = mac_for(secret, &signing_input)?.finalize().into_bytes();

    Ok(format!(
        "{}.{}",
        signing_input,
        URL_SAFE_NO_PAD.encode(signature)
    ))
}

fn split_token(token: &str) -> Result<(&str, &str, &str)> {
    let mut parts = token.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(claims), Some(signature), None) => Ok((header, claims, signature)),
        _ => Err(GhostError::InvalidToken(
            "expected three dot-separated segments".to_string(),
        )),
    }
}

/// Decode header and claims without checking the signature
pub fn decode_unverified(token: &str) -> Result<DecodedToken> {
    let (header_segment, claims_segment, _) = split_token(token)?;

    let header: Header = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(header_segment)?)?;
    let claims: Claims = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(claims_segment)?)?;

    Ok(DecodedToken { header, claims })
}

/// Verify a token the way the Admin API does: HS256 signature under `secret`,
/// admin audience, and `exp` still in the future at `now`.
pub fn verify(token: &str, secret: &[u8], now: DateTime<Utc>) -> Result<DecodedToken> {
    let (header_segment, claims_segment, signature_segment) = split_token(token)?;
    let decoded = decode_unverified(token)?;

    if decoded.header.alg != ALGORITHM {
        return Err(GhostError::InvalidToken(format!(
            "unsupported algorithm {}",
            decoded.header.alg
        )));
    }

    let signature = URL_SAFE_NO_PAD.decode(signature_segment)?;
    let signing_input = format!("{}.{}", header_segment, claims_segment);
    mac_for(secret, &signing_input)?
        .verify_slice(&signature)
        .map_err(|_| GhostError::InvalidToken("signature mismatch".to_string()))?;

    if decoded.claims.aud != AUDIENCE {
        return Err(GhostError::InvalidToken(format!(
            "unexpected audience {}",
            decoded.claims.aud
        )));
    }
    if now.timestamp() >= decoded.claims.exp {
        return Err(GhostError::TokenExpired);
    }

    Ok(decoded)
}
