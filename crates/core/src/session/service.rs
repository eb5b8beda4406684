//! Session lifecycle service

use std::sync::Arc;

use travelgate_domain::Result;
use tracing::{info, warn};

use super::{IdentityProvider, SessionContext, SessionHandle};

/// Starts and ends sessions, keeping the shared handle current.
pub struct SessionService {
    provider: Arc<dyn IdentityProvider>,
    handle: SessionHandle,
}

impl SessionService {
    pub fn new(provider: Arc<dyn IdentityProvider>, handle: SessionHandle) -> Self {
        Self { provider, handle }
    }

    /// Handle to inject into transports and approval checks.
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Establish the session and publish it through the handle.
    pub async fn start(&self) -> Result<SessionContext> {
        let context = self.provider.init().await?;
        info!(
            subject = context.subject().unwrap_or("-"),
            roles = context.role_names().count(),
            "session established"
        );
        self.handle.replace(context.clone());
        Ok(context)
    }

    /// Invalidate the local session, then notify the provider.
    ///
    /// The local session is cleared even if the provider call fails.
    pub async fn logout(&self) -> Result<()> {
        self.handle.invalidate();
        if let Err(err) = self.provider.logout().await {
            warn!(error = %err, "identity provider logout failed");
            return Err(err);
        }
        info!("session ended");
        Ok(())
    }

    pub fn account_management_url(&self) -> String {
        self.provider.account_management_url()
    }
}
