use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Display name used wherever a record has no owning user.
pub const GUEST: &str = "Guest";

/// An authenticated user, as identified by a validated token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserRef {
    pub id: String,
    pub username: String,
}
