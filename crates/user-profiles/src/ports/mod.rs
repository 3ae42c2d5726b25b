//! Ports for the user-profiles subsystem.

pub mod inbound;
pub mod outbound;
