//! Request lifecycle status and approval steps
//!
//! ```text
//! PENDING --step1(approved)--> STEP1_APPROVED --step2(approved)--> APPROVED
//!    |                              |
//!    +--step1(rejected)--> STEP1_REJECTED
//!                                   +--step2(rejected)--> REJECTED
//! ```

use super::Role;
use crate::constants::messages;

/// Lifecycle status of a travel or visa request.
///
/// The backend occasionally stores statuses in other casings (`"Pending"`);
/// parsing is case-insensitive. Anything unrecognized is kept verbatim in
/// [`RequestStatus::Unknown`] so a single odd row never poisons a whole list.
/// A `null` or absent status decodes as [`RequestStatus::missing`], never as
/// `PENDING`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum RequestStatus {
    #[default]
    Pending,
    Step1Approved,
    Step1Rejected,
    Approved,
    Rejected,
    Unknown(String),
}

crate::impl_wire_conversions!(RequestStatus {
    Pending => "PENDING",
    Step1Approved => "STEP1_APPROVED",
    Step1Rejected => "STEP1_REJECTED",
    Approved => "APPROVED",
    Rejected => "REJECTED",
} else Unknown);

impl RequestStatus {
    /// Every status the workflow can produce, in lifecycle order.
    pub const KNOWN: [Self; 5] =
        [Self::Pending, Self::Step1Approved, Self::Step1Rejected, Self::Approved, Self::Rejected];

    /// Statuses visible to the second approval step.
    pub const STEP2_SCOPE: [Self; 3] = [Self::Step1Approved, Self::Approved, Self::Rejected];

    /// Whether no transition leaves this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Step1Rejected | Self::Approved | Self::Rejected)
    }

    /// Status of a row the backend sent without one.
    pub fn missing() -> Self {
        Self::Unknown(String::new())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Unknown(raw) if raw.trim().is_empty())
    }

    /// Whether this is one of the five workflow statuses.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Next status after `step` decides `approved`, or `None` when the step
    /// does not apply to this status.
    pub fn after(&self, step: ApprovalStep, approved: bool) -> Option<Self> {
        match (self, step) {
            (Self::Pending, ApprovalStep::Step1) => {
                Some(if approved { Self::Step1Approved } else { Self::Step1Rejected })
            }
            (Self::Step1Approved, ApprovalStep::Step2) => {
                Some(if approved { Self::Approved } else { Self::Rejected })
            }
            _ => None,
        }
    }

    /// Display label used by the back office.
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "En attente",
            Self::Step1Approved => "Étape 1 approuvée",
            Self::Step1Rejected => "Étape 1 rejetée",
            Self::Approved => "Approuvée",
            Self::Rejected => "Rejetée",
            Self::Unknown(raw) if raw.trim().is_empty() => UNKNOWN_LABEL,
            Self::Unknown(raw) => raw,
        }
    }

    /// Case-insensitive comparison against a filter value.
    pub fn matches(&self, wanted: &str) -> bool {
        self.to_string().eq_ignore_ascii_case(wanted.trim())
    }
}

const UNKNOWN_LABEL: &str = "Inconnu";

/// Label for an optional status; a missing status reads "Inconnu".
pub fn status_label(status: Option<&RequestStatus>) -> &str {
    status.map_or(UNKNOWN_LABEL, RequestStatus::label)
}

/// One of the two sequential approval decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApprovalStep {
    Step1,
    Step2,
}

impl ApprovalStep {
    /// Role a caller must hold to take this decision.
    pub fn required_role(self) -> Role {
        match self {
            Self::Step1 => Role::Officer,
            Self::Step2 => Role::HeadMarket,
        }
    }

    /// Status a request must be in for this step to apply.
    pub fn expected_status(self) -> RequestStatus {
        match self {
            Self::Step1 => RequestStatus::Pending,
            Self::Step2 => RequestStatus::Step1Approved,
        }
    }

    /// Fixed message shown when the caller lacks [`Self::required_role`].
    pub fn forbidden_message(self) -> &'static str {
        match self {
            Self::Step1 => messages::FORBIDDEN_STEP1,
            Self::Step2 => messages::FORBIDDEN_STEP2,
        }
    }

    /// Fixed message shown when the request is not in
    /// [`Self::expected_status`].
    pub fn out_of_order_message(self) -> &'static str {
        match self {
            Self::Step1 => messages::STEP1_OUT_OF_ORDER,
            Self::Step2 => messages::STEP2_OUT_OF_ORDER,
        }
    }

    /// Path segment used by the validation endpoints.
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Step1 => "step1",
            Self::Step2 => "step2",
        }
    }
}
