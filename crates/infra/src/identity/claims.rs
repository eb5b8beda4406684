//! Access-token claims
//!
//! Tokens are decoded without signature verification. The claims only drive
//! what the client shows; the backend re-checks every call.

use std::collections::{BTreeMap, BTreeSet};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use travelgate_core::SessionContext;
use travelgate_domain::{Result, TravelgateError};

use crate::errors::InfraError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RoleSet {
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Claims read from a Keycloak-style access token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub preferred_username: Option<String>,
    /// Expiry, seconds since the epoch.
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub realm_access: Option<RoleSet>,
    #[serde(default)]
    pub resource_access: BTreeMap<String, RoleSet>,
}

impl TokenClaims {
    /// Decode the payload segment of a compact JWT.
    pub fn decode(token: &str) -> Result<Self> {
        let mut segments = token.trim().split('.');
        let payload = match (segments.next(), segments.next(), segments.next()) {
            (Some(_), Some(payload), Some(_)) if !payload.is_empty() => payload,
            _ => return Err(TravelgateError::Auth("access token is not a JWT".to_string())),
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|err| TravelgateError::from(InfraError::from(err)))?;
        serde_json::from_slice(&bytes)
            .map_err(|err| TravelgateError::Auth(format!("invalid token claims: {err}")))
    }

    /// Realm roles merged with every client's roles, deduplicated.
    pub fn roles(&self) -> BTreeSet<String> {
        self.realm_access
            .iter()
            .chain(self.resource_access.values())
            .flat_map(|set| set.roles.iter().cloned())
            .collect()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    /// Session for `token` carrying these claims.
    pub fn into_session(self, token: &str) -> SessionContext {
        let expires_at = self.expires_at();
        let mut session = SessionContext::new(token, self.roles());
        if let Some(sub) = self.sub {
            session = session.with_subject(sub);
        }
        if let Some(name) = self.name.or(self.preferred_username) {
            session = session.with_full_name(name);
        }
        if let Some(expires_at) = expires_at {
            session = session.with_expiry(expires_at);
        }
        session
    }
}

/// Build an unsigned token around `claims`; used by tests.
#[cfg(test)]
pub(crate) fn encode_unsigned(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.sig")
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use travelgate_domain::Role;

    use super::*;

    #[test]
    fn merges_realm_and_client_roles() {
        let token = encode_unsigned(&json!({
            "sub": "u-1",
            "name": "Amira Ben Salah",
            "exp": 1_900_000_000,
            "realm_access": {"roles": ["ROLE_OFFICER", "offline_access"]},
            "resource_access": {
                "stage-client": {"roles": ["ROLE_HEAD_MARKET", "ROLE_OFFICER"]},
                "account": {"roles": ["manage-account"]}
            }
        }));

        let claims = TokenClaims::decode(&token).unwrap();
        let roles: Vec<_> = claims.roles().into_iter().collect();
        assert_eq!(
            roles,
            vec!["ROLE_HEAD_MARKET", "ROLE_OFFICER", "manage-account", "offline_access"]
        );

        let session = claims.into_session(&token);
        assert!(session.has_role(Role::Officer));
        assert!(session.has_role(Role::HeadMarket));
        assert_eq!(session.subject(), Some("u-1"));
        assert_eq!(session.full_name(), Some("Amira Ben Salah"));
        assert!(session.expires_at().is_some());
    }

    #[test]
    fn missing_role_claims_mean_no_roles() {
        let token = encode_unsigned(&json!({"sub": "svc"}));
        let claims = TokenClaims::decode(&token).unwrap();
        assert!(claims.roles().is_empty());
        assert_eq!(claims.expires_at(), None);
    }

    #[test]
    fn malformed_tokens_are_auth_errors() {
        for token in ["", "abc", "a..c", "a.!!!.c"] {
            assert!(matches!(TokenClaims::decode(token), Err(TravelgateError::Auth(_))), "{token}");
        }

        let not_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode("plain"));
        assert!(matches!(TokenClaims::decode(&not_json), Err(TravelgateError::Auth(_))));
    }
}
