//! API Layer
//!
//! Transport client for the SplitGroup REST API and its error taxonomy.

pub mod client;
pub mod error;

pub use error::{ApiError, ErrorKind};
