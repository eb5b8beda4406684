//! Ephemeral user-visible messages

pub mod board;

pub use board::{Message, MessageBoard, MessageKind};
