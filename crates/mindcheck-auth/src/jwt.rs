use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Claims carried by a MindCheck access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub exp: u64,
    pub iat: u64,
    #[serde(default)]
    pub is_staff: bool,
}

/// Signing and verification keys derived from one shared secret.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

/// Issue a token for `sub` that expires after `ttl`.
pub fn issue_token(
    keys: &TokenKeys,
    sub: &str,
    username: &str,
    is_staff: bool,
    ttl: jiff::SignedDuration,
) -> Result<String, AuthError> {
    let now = jiff::Timestamp::now().as_second();
    let claims = Claims {
        sub: sub.to_string(),
        username: username.to_string(),
        iat: now.max(0) as u64,
        exp: now.saturating_add(ttl.as_secs()).max(0) as u64,
        is_staff,
    };
    Ok(encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding)?)
}

/// Validate a token's signature and expiry and return its claims.
pub fn validate_token(token: &str, keys: &TokenKeys) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(token, &keys.decoding, &validation).map_err(|e| {
        if matches!(e.kind(), ErrorKind::ExpiredSignature) {
            AuthError::TokenExpired
        } else {
            AuthError::Jwt(e)
        }
    })?;

    if token_data.claims.sub.is_empty() {
        return Err(AuthError::InvalidToken("empty subject".to_string()));
    }

    Ok(token_data.claims)
}
