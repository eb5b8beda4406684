//! Port interface for the identity provider
//!
//! Infrastructure implements this against the real provider; tests use an
//! in-memory double.

use async_trait::async_trait;
use travelgate_domain::Result;

use super::SessionContext;

/// Identity provider client
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Establish a session, suspending until it is ready or has failed.
    async fn init(&self) -> Result<SessionContext>;

    /// End the session at the provider.
    async fn logout(&self) -> Result<()>;

    /// Account management page for the signed-in user.
    fn account_management_url(&self) -> String;
}
