//! Two-step, role-gated approval

pub mod service;
pub mod transition;

pub use service::ApprovalService;
pub use transition::transition;
