//! Keycloak identity provider
//!
//! The interactive login happens outside this crate; what arrives here is
//! an access token. `init` turns it into a [`SessionContext`], `logout`
//! ends the provider session.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use reqwest::Method;
use travelgate_core::{IdentityProvider, SessionContext};
use travelgate_domain::{IdentityConfig, Result, TravelgateError};
use tracing::{debug, info, warn};
use url::Url;

use super::claims::TokenClaims;
use crate::http::HttpClient;

pub struct KeycloakIdentity {
    config: IdentityConfig,
    http: HttpClient,
    token: RwLock<Option<String>>,
}

impl KeycloakIdentity {
    /// Provider for `config`, seeded with its pre-issued token if any.
    pub fn new(config: IdentityConfig, http: HttpClient) -> Self {
        let token = config.access_token.clone().filter(|t| !t.trim().is_empty());
        Self { config, http, token: RwLock::new(token) }
    }

    /// Hand over the token obtained by the login flow.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    pub fn config(&self) -> &IdentityConfig {
        &self.config
    }

    fn realm_url(&self) -> String {
        format!("{}/realms/{}", self.config.url.trim_end_matches('/'), self.config.realm)
    }

    /// Browser logout URL, redirecting back to the configured page.
    pub fn logout_url(&self) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/protocol/openid-connect/logout", self.realm_url()))
            .map_err(|err| TravelgateError::Config(format!("invalid identity url: {err}")))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("client_id", &self.config.client_id);
            if let Some(redirect) = &self.config.logout_redirect_uri {
                query.append_pair("post_logout_redirect_uri", redirect);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl IdentityProvider for KeycloakIdentity {
    async fn init(&self) -> Result<SessionContext> {
        let token = self
            .token
            .read()
            .clone()
            .ok_or_else(|| TravelgateError::Auth("no access token available".to_string()))?;

        let claims = TokenClaims::decode(&token)?;
        if claims.expires_at().is_some_and(|exp| exp <= Utc::now()) {
            warn!(realm = %self.config.realm, "access token already expired");
            return Err(TravelgateError::Auth("access token expired".to_string()));
        }

        let session = claims.into_session(&token);
        info!(
            realm = %self.config.realm,
            subject = ?session.subject(),
            roles = session.role_names().count(),
            "session established"
        );
        Ok(session)
    }

    async fn logout(&self) -> Result<()> {
        let Some(token) = self.token.write().take() else {
            debug!("logout without a session");
            return Ok(());
        };

        let url = format!("{}/protocol/openid-connect/logout", self.realm_url());
        let request = self
            .http
            .request(Method::POST, &url)
            .bearer_auth(token)
            .form(&[("client_id", self.config.client_id.as_str())]);

        let response = self.http.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "identity provider rejected logout");
            return Err(TravelgateError::Auth(format!("logout failed with status {status}")));
        }

        info!(realm = %self.config.realm, "session ended at identity provider");
        Ok(())
    }

    fn account_management_url(&self) -> String {
        self.config.account_url()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use travelgate_domain::Role;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::identity::claims::encode_unsigned;

    fn config(url: &str) -> IdentityConfig {
        IdentityConfig {
            url: url.to_string(),
            realm: "stage-realm".into(),
            client_id: "stage-client".into(),
            logout_redirect_uri: Some("http://localhost:4200".into()),
            access_token: None,
        }
    }

    fn token(exp: i64) -> String {
        encode_unsigned(&json!({
            "sub": "u-7",
            "exp": exp,
            "realm_access": {"roles": ["ROLE_OFFICER"]},
        }))
    }

    #[tokio::test]
    async fn init_without_token_fails() {
        let identity = KeycloakIdentity::new(config("http://kc"), HttpClient::new().unwrap());
        assert!(matches!(identity.init().await, Err(TravelgateError::Auth(_))));
    }

    #[tokio::test]
    async fn init_builds_session_from_claims() {
        let identity = KeycloakIdentity::new(config("http://kc"), HttpClient::new().unwrap());
        let token = token(Utc::now().timestamp() + 600);
        identity.set_token(token.clone());

        let session = identity.init().await.unwrap();
        assert_eq!(session.token(), Some(token.as_str()));
        assert!(session.has_role(Role::Officer));
        assert!(!session.has_role(Role::HeadMarket));
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let mut cfg = config("http://kc");
        cfg.access_token = Some(token(Utc::now().timestamp() - 60));
        let identity = KeycloakIdentity::new(cfg, HttpClient::new().unwrap());

        assert!(matches!(identity.init().await, Err(TravelgateError::Auth(_))));
    }

    #[tokio::test]
    async fn logout_posts_to_realm_endpoint_and_drops_token() {
        let server = MockServer::start().await;
        let token = token(Utc::now().timestamp() + 600);

        Mock::given(method("POST"))
            .and(path("/realms/stage-realm/protocol/openid-connect/logout"))
            .and(header("authorization", format!("Bearer {token}").as_str()))
            .and(body_string_contains("client_id=stage-client"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let identity = KeycloakIdentity::new(config(&server.uri()), HttpClient::new().unwrap());
        identity.set_token(token);

        identity.logout().await.unwrap();
        assert!(identity.init().await.is_err());

        // second logout has nothing to end
        identity.logout().await.unwrap();
    }

    #[tokio::test]
    async fn rejected_logout_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let identity = KeycloakIdentity::new(config(&server.uri()), HttpClient::new().unwrap());
        identity.set_token("x.y.z");

        assert!(matches!(identity.logout().await, Err(TravelgateError::Auth(_))));
    }

    #[test]
    fn urls_point_at_the_realm() {
        let identity = KeycloakIdentity::new(config("http://kc/"), HttpClient::new().unwrap());
        assert_eq!(identity.account_management_url(), "http://kc/realms/stage-realm/account");

        let logout = identity.logout_url().unwrap();
        assert_eq!(logout.path(), "/realms/stage-realm/protocol/openid-connect/logout");
        let pairs: Vec<_> = logout.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();
        assert!(pairs.contains(&("client_id".into(), "stage-client".into())));
        assert!(pairs.contains(&("post_logout_redirect_uri".into(), "http://localhost:4200".into())));
    }
}
