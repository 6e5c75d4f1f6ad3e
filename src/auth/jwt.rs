use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Role claim carried by every token this service issues.
pub const ADMIN_ROLE: &str = "admin";

/// Claims of an admin session token (HS256).
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The login the token was issued to.
    pub sub: String,
    /// Token expiration (Unix timestamp).
    pub exp: usize,
    /// Token issued-at (Unix timestamp).
    pub iat: usize,
    pub role: String,
}

/// A freshly signed token with the instants it was minted for.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Sign an admin token for `login`, valid for `ttl_secs` seconds.
pub fn issue_token(login: &str, secret: &str, ttl_secs: i64) -> Result<IssuedToken, String> {
    let issued_at = Utc::now();
    let expires_at = Duration::try_seconds(ttl_secs)
        .filter(|ttl| *ttl > Duration::zero())
        .and_then(|ttl| issued_at.checked_add_signed(ttl))
        .ok_or_else(|| format!("Invalid session lifetime: {ttl_secs}s"))?;

    let claims = Claims {
        sub: login.to_string(),
        exp: expires_at.timestamp() as usize,
        iat: issued_at.timestamp() as usize,
        role: ADMIN_ROLE.to_string(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("Failed to sign token: {e}"))?;

    Ok(IssuedToken {
        token,
        issued_at,
        expires_at,
    })
}

/// Validate an admin token and return the decoded claims.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|td| td.claims)
    .map_err(|e| format!("{e}"))?;

    if claims.role != ADMIN_ROLE {
        return Err(format!("Unexpected role {}", claims.role));
    }
    Ok(claims)
}
