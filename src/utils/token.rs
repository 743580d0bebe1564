use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

/// Issues and checks the HS256 bearer tokens handed out at login.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(ttl_hours),
        }
    }

    pub fn issue(&self, user_id: i32) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp() as usize,
            exp: (now + self.ttl).timestamp() as usize,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| Error::Internal(format!("Token signing failed: {}", e)))
    }

    /// Returns the user id carried by a valid, unexpired token.
    pub fn verify(&self, token: &str) -> Result<i32> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        let data = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|_| Error::Unauthenticated("invalid_token".to_string()))?;
        data.claims
            .sub
            .parse()
            .map_err(|_| Error::Unauthenticated("invalid_token".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_carries_the_user_id() {
        let issuer = TokenIssuer::new("test_secret_key", 24);
        let token = issuer.issue(42).unwrap();
        assert_eq!(issuer.verify(&token).unwrap(), 42);
    }

    #[test]
    fn token_from_another_secret_is_rejected() {
        let token = TokenIssuer::new("one", 24).issue(1).unwrap();
        let err = TokenIssuer::new("two", 24).verify(&token).unwrap_err();
        assert!(matches!(err, Error::Unauthenticated(_)));
    }

    #[test]
    fn expired_token_is_rejected() {
        // Past the default 60s leeway.
        let token = TokenIssuer::new("test_secret_key", -2).issue(7).unwrap();
        assert!(TokenIssuer::new("test_secret_key", 24).verify(&token).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(TokenIssuer::new("k", 1).verify("not.a.jwt").is_err());
    }
}
