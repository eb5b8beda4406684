//! Approval service - role check, transition check, then the backend call

use std::sync::Arc;

use travelgate_domain::{ApprovalStep, RequestId, RequestStatus, Result, TravelgateError};
use tracing::{info, instrument, warn};

use super::transition;
use crate::entity::WorkflowEntity;
use crate::session::SessionHandle;
use crate::sync::RequestSource;

/// Records approval decisions for one request kind.
pub struct ApprovalService<E: WorkflowEntity> {
    source: Arc<dyn RequestSource<E>>,
    session: SessionHandle,
}

impl<E: WorkflowEntity> ApprovalService<E> {
    pub fn new(source: Arc<dyn RequestSource<E>>, session: SessionHandle) -> Self {
        Self { source, session }
    }

    /// Fail with the step's fixed message unless the session holds its role.
    pub fn authorize(&self, step: ApprovalStep) -> Result<()> {
        if self.session.has_role(step.required_role()) {
            Ok(())
        } else {
            Err(TravelgateError::Forbidden(step.forbidden_message().to_string()))
        }
    }

    /// Take the `step` decision on request `id`.
    ///
    /// `current` is the locally known status, when there is one; it is
    /// checked against the lifecycle before anything is sent. Returns the
    /// status the request should now be in, if it could be derived.
    #[instrument(skip(self, current), fields(kind = E::KIND))]
    pub async fn decide(
        &self,
        step: ApprovalStep,
        id: RequestId,
        approved: bool,
        current: Option<&RequestStatus>,
    ) -> Result<Option<RequestStatus>> {
        if let Err(err) = self.authorize(step) {
            warn!(required = %step.required_role(), "approval refused: missing role");
            return Err(err);
        }

        let next = current.map(|status| transition(status, step, approved)).transpose()?;

        self.source.validate(step, id, approved).await?;
        info!(next = ?next, "approval recorded");
        Ok(next)
    }
}
