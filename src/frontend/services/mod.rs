//! Frontend services for session state and navigation guarding.

pub mod context;
pub mod guard;
pub mod session;
