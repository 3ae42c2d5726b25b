//! # Ports
//!
//! Port traits for the hexagonal architecture: the inbound API other
//! components drive, and the outbound SPI this subsystem requires its host
//! to provide.

pub mod inbound;
pub mod outbound;
