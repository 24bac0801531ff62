use mindcheck_core::models::user::UserRef;

use crate::error::AuthError;
use crate::jwt::{self, Claims, TokenKeys};

/// Who is making a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    Guest,
    User { user: UserRef, is_staff: bool },
}

impl Caller {
    pub fn user(&self) -> Option<&UserRef> {
        match self {
            Caller::Guest => None,
            Caller::User { user, .. } => Some(user),
        }
    }

    pub fn is_staff(&self) -> bool {
        matches!(self, Caller::User { is_staff: true, .. })
    }
}

impl From<Claims> for Caller {
    fn from(claims: Claims) -> Self {
        Caller::User {
            user: UserRef {
                id: claims.sub,
                username: claims.username,
            },
            is_staff: claims.is_staff,
        }
    }
}

/// Extract the token from an `Authorization` header value.
///
/// Accepts both `Bearer <token>` and `Token <token>`.
pub fn bearer_token(header: &str) -> Result<&str, AuthError> {
    let token = header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("Token "))
        .ok_or(AuthError::MalformedHeader)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::MalformedHeader);
    }
    Ok(token)
}

/// Resolve the caller from an optional `Authorization` header.
///
/// No header means a guest. A header that is present but does not carry a
/// valid token is an error, never a silent downgrade to guest.
pub fn identify(header: Option<&str>, keys: &TokenKeys) -> Result<Caller, AuthError> {
    let Some(header) = header else {
        return Ok(Caller::Guest);
    };
    let claims = jwt::validate_token(bearer_token(header)?, keys)?;
    tracing::debug!(sub = %claims.sub, "caller authenticated");
    Ok(Caller::from(claims))
}
