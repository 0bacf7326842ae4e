//! Claims carried inside an access token

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::user::UserId;

/// JWT claims structure
///
/// Wire field names: `sub`, `userId`, `username`, `iat`, `exp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Numeric user id
    #[serde(rename = "userId")]
    pub user_id: UserId,
    /// Username, duplicated from `sub` for clients that read it by name
    pub username: String,
    /// Issued at (Unix epoch seconds)
    pub iat: i64,
    /// Expiration (Unix epoch seconds)
    pub exp: i64,
}

impl Claims {
    /// Build claims issued at `issued_at` and valid for `ttl_ms` milliseconds.
    ///
    /// Token timestamps have second precision: `issued_at` is truncated to the
    /// second and the TTL is floored to whole seconds.
    pub fn new(user_id: UserId, username: &str, issued_at: DateTime<Utc>, ttl_ms: i64) -> Self {
        let iat = issued_at.timestamp();
        let exp = iat + ttl_ms.div_euclid(1000);

        Self {
            sub: username.to_string(),
            user_id,
            username: username.to_string(),
            iat,
            exp,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.iat, 0).single().unwrap_or_default()
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0).single().unwrap_or_default()
    }

    /// Expired once `now` reaches `exp`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
