//! Unit tests for session token issuance and validation

use crate::domain::entities::token::DEFAULT_SESSION_TTL_SECS;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn sample_user() -> User {
    User::new(
        "diner".to_string(),
        "diner@example.com".to_string(),
        "hash".to_string(),
    )
}

fn service_with_ttl(ttl_secs: i64) -> TokenService {
    TokenService::new(TokenServiceConfig::new("unit-test-secret", ttl_secs))
}

#[test]
fn test_issue_then_verify_round_trip() {
    let service = service_with_ttl(DEFAULT_SESSION_TTL_SECS);
    let user = sample_user();

    let token = service.issue(&user).unwrap();
    let claims = service.verify(&token).unwrap();

    assert_eq!(claims.sub, user.id.to_string());
    assert_eq!(claims.username, user.username);
    assert_eq!(claims.email, user.email);
    assert_eq!(claims.exp - claims.iat, DEFAULT_SESSION_TTL_SECS);
    assert_eq!(claims.user_id().unwrap(), user.id);
}

#[test]
fn test_tampered_token_is_rejected() {
    let service = service_with_ttl(3600);
    let token = service.issue(&sample_user()).unwrap();

    let mut tampered = token.clone();
    tampered.pop();
    tampered.push('x');

    let result = service.verify(&tampered);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Invalid))
    ));
}

#[test]
fn test_token_signed_with_other_secret_is_rejected() {
    let issuer = TokenService::new(TokenServiceConfig::new("secret-a", 3600));
    let verifier = TokenService::new(TokenServiceConfig::new("secret-b", 3600));

    let token = issuer.issue(&sample_user()).unwrap();
    let result = verifier.verify(&token);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Invalid))
    ));
}

#[test]
fn test_expired_token_is_reported_as_expired() {
    // Negative lifetime backdates the expiry beyond the validation leeway
    let service = service_with_ttl(-120);
    let token = service.issue(&sample_user()).unwrap();

    let result = service.verify(&token);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Expired))
    ));
}

#[test]
fn test_garbage_token_is_invalid() {
    let service = service_with_ttl(3600);
    let result = service.verify("not.a.token");
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Invalid))
    ));
}

#[test]
fn test_default_config_uses_eight_hour_sessions() {
    let config = TokenServiceConfig::default();
    assert_eq!(config.session_ttl_secs, 8 * 60 * 60);
}
