//! Status transitions

use travelgate_domain::{ApprovalStep, RequestStatus, Result, TravelgateError};
use tracing::debug;

/// Status that follows `current` once `step` decides `approved`.
///
/// Fails without side effects when the step does not apply: step 1 on
/// anything but `PENDING`, step 2 on anything but `STEP1_APPROVED`. The error
/// carries the step's fixed refusal message.
pub fn transition(
    current: &RequestStatus,
    step: ApprovalStep,
    approved: bool,
) -> Result<RequestStatus> {
    current.after(step, approved).ok_or_else(|| {
        debug!(
            step = step.path_segment(),
            expected = %step.expected_status(),
            %current,
            "transition refused"
        );
        TravelgateError::InvalidTransition(step.out_of_order_message().to_string())
    })
}
