//! Operator-side token issuing, shared by the `mint-token` binary.

use clap::Parser;

use mindcheck_auth::jwt::{TokenKeys, issue_token};

pub const MAX_TTL_HOURS: i64 = 24 * 366;

/// Issue an access token for a MindCheck user.
///
/// Signs with `MINDCHECK_TOKEN_SECRET`, the same secret the API validates
/// against. The token is printed to stdout.
#[derive(Debug, Parser)]
#[command(name = "mint-token", version, about)]
pub struct MintTokenArgs {
    /// Stable user id (token subject).
    #[arg(long)]
    pub sub: String,

    /// Display name shown on the user's results.
    #[arg(long)]
    pub username: String,

    /// Allow reading any user's results.
    #[arg(long)]
    pub staff: bool,

    /// Lifetime of the token, at most one year.
    #[arg(long, default_value_t = 24, value_parser = clap::value_parser!(i64).range(1..=MAX_TTL_HOURS))]
    pub ttl_hours: i64,
}

impl MintTokenArgs {
    pub fn mint(&self, secret: &[u8]) -> eyre::Result<String> {
        let keys = TokenKeys::from_secret(secret);
        let token = issue_token(
            &keys,
            &self.sub,
            &self.username,
            self.staff,
            jiff::SignedDuration::from_hours(self.ttl_hours),
        )?;
        Ok(token)
    }
}
