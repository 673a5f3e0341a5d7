//! State Management
//!
//! Global UI state and the session holder.

pub mod global;
pub mod session;

pub use global::{provide_global_state, use_global_state, GlobalState};
pub use session::{provide_session, use_session, SessionState};
