//! mindcheck-auth
//!
//! Bearer tokens and caller identity. Tokens are HS256 JWTs signed with a
//! shared secret; a request without one is served as a guest.

pub mod caller;
pub mod error;
pub mod jwt;
