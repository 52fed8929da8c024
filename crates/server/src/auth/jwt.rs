use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared_types::{AppError, Session};

/// Claims carried in the session token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Account id.
    pub sub: String,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
    /// Unique token identifier, so two tokens issued in the same second differ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

/// Whether `JWT_SECRET` is set, without logging.
pub fn signing_configured() -> bool {
    std::env::var("JWT_SECRET").is_ok_and(|s| !s.is_empty())
}

fn jwt_secret() -> Result<String, AppError> {
    std::env::var("JWT_SECRET")
        .ok()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            tracing::error!("JWT_SECRET is not set");
            AppError::internal("Session signing is not configured")
        })
}

/// Issue a session token for `session` valid for `minutes`.
pub fn create_session_token(session: &Session, minutes: i64) -> Result<String, AppError> {
    let now = Utc::now();
    let expires = Duration::try_minutes(minutes)
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .ok_or_else(|| AppError::internal(format!("session lifetime out of range: {minutes}")))?;
    let claims = Claims {
        sub: session.id.clone(),
        email: session.email.clone(),
        iat: now.timestamp(),
        exp: expires.timestamp(),
        jti: Some(uuid::Uuid::new_v4().to_string()),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret()?.as_bytes()),
    )
    .map_err(|e| AppError::internal(e.to_string()))
}

/// Validate a session token's signature and expiry.
pub fn validate_session_token(token: &str) -> Result<Claims, AppError> {
    let secret = jwt_secret()?;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired session"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_secret() {
        std::env::set_var("JWT_SECRET", "test-secret-key-for-jwt-unit-tests");
    }

    #[test]
    fn create_and_validate_session_token() {
        setup_test_secret();
        let session = Session::new("u1", "bob@x.com");
        let token = create_session_token(&session, 30).unwrap();
        let claims = validate_session_token(&token).unwrap();
        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.email, "bob@x.com");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn absurd_lifetime_is_an_error() {
        setup_test_secret();
        let session = Session::new("u1", "bob@x.com");
        assert!(create_session_token(&session, i64::MAX).is_err());
    }

    #[test]
    fn expired_token_rejected() {
        setup_test_secret();
        let now = Utc::now();
        let claims = Claims {
            sub: "u1".to_string(),
            email: "expired@test.com".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
            jti: None,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(jwt_secret().unwrap().as_bytes()),
        )
        .unwrap();

        let err = validate_session_token(&token).unwrap_err();
        assert_eq!(err.kind, shared_types::AppErrorKind::Unauthorized);
    }

    #[test]
    fn invalid_token_rejected() {
        setup_test_secret();
        assert!(validate_session_token("not.a.valid.jwt").is_err());
        assert!(validate_session_token("").is_err());
    }

    #[test]
    fn tokens_for_same_session_differ() {
        setup_test_secret();
        let session = Session::new("u1", "bob@x.com");
        let a = create_session_token(&session, 5).unwrap();
        let b = create_session_token(&session, 5).unwrap();
        assert_ne!(a, b);
    }
}
