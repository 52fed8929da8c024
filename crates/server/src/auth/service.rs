//! Session operations shared by server functions and REST handlers.

use shared_types::{AppError, Profile, Session, SignInRequest};

use super::jwt::{self, Claims};
use super::password;
use crate::directory::AccountDirectory;
use crate::error_convert::ValidateRequest;

const BAD_CREDENTIALS: &str = "Invalid email or password";

/// Result of a successful sign-in.
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub session: Session,
    pub token: String,
    pub max_age_minutes: i64,
}

/// Check credentials against the directory and issue a session token.
pub fn sign_in(
    directory: &AccountDirectory,
    request: &SignInRequest,
    session_minutes: i64,
) -> Result<SignedIn, AppError> {
    request.validate_request()?;

    let account = directory.find_by_email(&request.email).ok_or_else(|| {
        tracing::info!("Sign-in rejected: unknown email");
        AppError::unauthorized(BAD_CREDENTIALS)
    })?;

    if account.password_hash.is_empty() {
        tracing::warn!(account = %account.id, "Sign-in rejected: account has no password hash");
        return Err(AppError::unauthorized(BAD_CREDENTIALS));
    }

    let valid = password::verify_password(&request.password, &account.password_hash)
        .map_err(|e| {
            tracing::error!(account = %account.id, %e, "Stored password hash is malformed");
            AppError::internal(e.to_string())
        })?;

    if !valid {
        tracing::info!(account = %account.id, "Sign-in rejected: wrong password");
        return Err(AppError::unauthorized(BAD_CREDENTIALS));
    }

    let session = account.session();
    let token = jwt::create_session_token(&session, session_minutes)?;
    tracing::info!(account = %account.id, "Signed in");

    Ok(SignedIn {
        session,
        token,
        max_age_minutes: session_minutes,
    })
}

/// Session for valid claims whose account still exists.
pub fn current_session(directory: &AccountDirectory, claims: &Claims) -> Option<Session> {
    directory.get(&claims.sub).map(|account| account.session())
}

/// Role codes for the signed-in account.
pub fn roles_for(directory: &AccountDirectory, claims: &Claims) -> Result<Vec<String>, AppError> {
    directory
        .roles(&claims.sub)
        .map(<[String]>::to_vec)
        .ok_or_else(|| AppError::unauthorized("Account no longer exists"))
}

/// Display profile for the signed-in account, if it has one.
pub fn profile_for(
    directory: &AccountDirectory,
    claims: &Claims,
) -> Result<Option<Profile>, AppError> {
    directory
        .get(&claims.sub)
        .map(|account| account.profile())
        .ok_or_else(|| AppError::unauthorized("Account no longer exists"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{AccountSeed, AppErrorKind};

    fn directory() -> AccountDirectory {
        std::env::set_var("JWT_SECRET", "test-secret-key-for-jwt-unit-tests");
        AccountDirectory::from_seeds(vec![
            AccountSeed {
                id: "u1".into(),
                email: "bob@x.com".into(),
                display_name: None,
                password_hash: password::hash_password("hunter22").unwrap(),
                roles: vec!["grower".into(), "qa".into()],
            },
            AccountSeed {
                id: "u2".into(),
                email: "nopass@x.com".into(),
                display_name: Some("No Pass".into()),
                password_hash: String::new(),
                roles: vec![],
            },
        ])
    }

    fn request(email: &str, password: &str) -> SignInRequest {
        SignInRequest {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn valid_credentials_issue_a_token() {
        let dir = directory();
        let signed_in = sign_in(&dir, &request("BOB@x.com", "hunter22"), 60).unwrap();
        assert_eq!(signed_in.session, Session::new("u1", "bob@x.com"));
        assert_eq!(signed_in.max_age_minutes, 60);

        let claims = jwt::validate_session_token(&signed_in.token).unwrap();
        assert_eq!(current_session(&dir, &claims), Some(signed_in.session));
        assert_eq!(roles_for(&dir, &claims).unwrap(), vec!["grower", "qa"]);
        assert_eq!(profile_for(&dir, &claims).unwrap(), None);
    }

    #[test]
    fn wrong_password_and_unknown_email_look_the_same() {
        let dir = directory();
        let wrong = sign_in(&dir, &request("bob@x.com", "nope"), 60).unwrap_err();
        let unknown = sign_in(&dir, &request("carol@x.com", "hunter22"), 60).unwrap_err();
        assert_eq!(wrong, unknown);
        assert_eq!(wrong.kind, AppErrorKind::Unauthorized);
    }

    #[test]
    fn account_without_hash_cannot_sign_in() {
        let dir = directory();
        let err = sign_in(&dir, &request("nopass@x.com", "anything"), 60).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
    }

    #[test]
    fn malformed_request_is_a_validation_error() {
        let dir = directory();
        let err = sign_in(&dir, &request("not-an-email", ""), 60).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field_errors.contains_key("email"));
        assert!(err.field_errors.contains_key("password"));
    }

    #[test]
    fn claims_for_removed_account() {
        let dir = directory();
        let claims = Claims {
            sub: "gone".into(),
            email: "gone@x.com".into(),
            exp: 0,
            iat: 0,
            jti: None,
        };
        assert_eq!(current_session(&dir, &claims), None);
        assert_eq!(
            roles_for(&dir, &claims).unwrap_err().kind,
            AppErrorKind::Unauthorized
        );
    }
}
