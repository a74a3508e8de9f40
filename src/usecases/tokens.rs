use crate::common::error::ServiceResult;
use crate::models::auth::Claims;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Sign a bearer token asserting `username`.
///
/// The payload carries the username only; tokens stay valid until the
/// signing secret rotates.
pub fn issue(secret_key: &str, username: &str) -> ServiceResult<String> {
    let claims = Claims {
        username: username.to_owned(),
    };
    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret_key.as_bytes()),
    )?;
    Ok(token)
}

/// Decode and verify a bearer token, returning its claims.
pub fn verify(secret_key: &str, token: &str) -> Option<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();
    jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret_key.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn issued_token_decodes_to_same_username() {
        let token = issue(SECRET, "alice").unwrap();
        let claims = verify(SECRET, &token).unwrap();
        assert_eq!(claims.username, "alice");
    }

    #[test]
    fn tampered_token_is_rejected() {
        let token = issue(SECRET, "alice").unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        assert!(verify(SECRET, &tampered).is_none());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = issue("other-secret", "alice").unwrap();
        assert!(verify(SECRET, &token).is_none());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(verify(SECRET, "not-a-token").is_none());
    }
}
