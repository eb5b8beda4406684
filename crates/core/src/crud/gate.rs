//! Role gate on catalog writes
//!
//! Like the approval steps, some record kinds may only be written by one
//! role. The check runs before anything is sent and fails with a fixed
//! message.

use travelgate_domain::constants::messages;
use travelgate_domain::{Result, Role, TravelgateError};

use crate::session::SessionHandle;

/// Kind of write a gate is asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    /// Create, or send an edited record.
    Save,
    /// Open a record for editing.
    Edit,
    Delete,
}

/// Refusal texts, one per action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateMessages {
    pub save: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
}

impl GateMessages {
    pub const MISSION: Self = Self {
        save: messages::FORBIDDEN_MISSION_SAVE,
        edit: messages::FORBIDDEN_MISSION_EDIT,
        delete: messages::FORBIDDEN_MISSION_DELETE,
    };

    fn for_action(&self, action: WriteAction) -> &'static str {
        match action {
            WriteAction::Save => self.save,
            WriteAction::Edit => self.edit,
            WriteAction::Delete => self.delete,
        }
    }
}

/// Writes allowed only to holders of one role.
#[derive(Clone)]
pub struct WriteGate {
    session: SessionHandle,
    role: Role,
    messages: GateMessages,
}

impl WriteGate {
    pub fn new(session: SessionHandle, role: Role, messages: GateMessages) -> Self {
        Self { session, role, messages }
    }

    /// Missions are written by officers only.
    pub fn missions(session: SessionHandle) -> Self {
        Self::new(session, Role::Officer, GateMessages::MISSION)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Whether the session may write at all.
    pub fn allows(&self) -> bool {
        self.session.has_role(self.role)
    }

    /// Fail with the action's fixed message unless the session holds the
    /// gate's role.
    pub fn authorize(&self, action: WriteAction) -> Result<()> {
        if self.allows() {
            Ok(())
        } else {
            Err(TravelgateError::Forbidden(self.messages.for_action(action).to_string()))
        }
    }
}
