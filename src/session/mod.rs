use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;

/// How requests identify themselves to the backend. Fixed per client
/// instance; there is no shared mutable login state.
#[derive(Debug, Clone)]
pub enum Auth {
    Anonymous,
    Bearer(String),
}

impl Auth {
    /// Reads `AEGIS_TOKEN`, falling back to anonymous.
    pub fn from_env() -> Self {
        match std::env::var("AEGIS_TOKEN") {
            Ok(token) if !token.trim().is_empty() => Auth::Bearer(token),
            _ => Auth::Anonymous,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Auth::Anonymous)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
}

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct Registration<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Exchange credentials for an access/refresh token pair.
pub async fn login(
    client: &ApiClient,
    username: &str,
    password: &str,
) -> Result<TokenPair, ApiError> {
    let outcome = client
        .post_json("api/auth/token", &Credentials { username, password })
        .await;
    match outcome {
        // The token endpoint answers 401 for bad credentials, which is
        // not the same thing as a missing session.
        Err(ApiError::AuthRequired) => Err(ApiError::Rejected {
            status: 401,
            message: "invalid username or password".to_string(),
        }),
        other => other,
    }
}

/// Create an account. The backend logs the new user straight in and
/// returns tokens alongside the profile fields.
pub async fn register(
    client: &ApiClient,
    username: &str,
    email: &str,
    password: &str,
) -> Result<TokenPair, ApiError> {
    client
        .post_json(
            "api/auth/register",
            &Registration {
                username,
                email,
                password,
            },
        )
        .await
}

pub async fn profile(client: &ApiClient) -> Result<UserProfile, ApiError> {
    client.get_json("api/auth/profile").await
}

/// Claims of interest from an access token.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenInfo {
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenInfo {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| Utc.timestamp_opt(exp, 0).single())
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at() {
            Some(expiry) => expiry <= now,
            None => false,
        }
    }
}

/// Read a token's claims without verifying it. Only the backend holds
/// the signing secret, so this is inspection, not validation.
pub fn inspect_token(token: &str) -> Result<TokenInfo, ApiError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.set_required_spec_claims::<&str>(&[]);

    let data = decode::<TokenInfo>(token, &DecodingKey::from_secret(&[]), &validation)
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    #[derive(Serialize)]
    struct Claims {
        token_type: &'static str,
        user_id: u64,
        exp: i64,
    }

    fn sample_token(exp: i64) -> String {
        let claims = Claims {
            token_type: "access",
            user_id: 7,
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"not-the-real-secret"),
        )
        .unwrap()
    }

    #[test]
    fn inspect_reads_claims_without_the_secret() {
        let info = inspect_token(&sample_token(4_102_444_800)).unwrap();
        assert_eq!(info.token_type.as_deref(), Some("access"));
        assert_eq!(info.user_id, Some(7));
        assert_eq!(info.exp, Some(4_102_444_800));
    }

    #[test]
    fn inspect_tolerates_expired_tokens() {
        let info = inspect_token(&sample_token(1_000_000_000)).unwrap();
        assert!(info.is_expired(Utc::now()));
    }

    #[test]
    fn garbage_is_not_a_token() {
        assert!(inspect_token("not.a.jwt").is_err());
    }

    #[test]
    fn auth_from_env_ignores_blank_tokens() {
        std::env::set_var("AEGIS_TOKEN", "   ");
        assert!(Auth::from_env().is_anonymous());
        std::env::set_var("AEGIS_TOKEN", "abc123");
        assert!(!Auth::from_env().is_anonymous());
        std::env::remove_var("AEGIS_TOKEN");
    }
}
