//! dPoPP Core — Fundamental types, configuration, and errors for the
//! dPoPP attested-passport subsystem.

pub mod config;
pub mod error;
pub mod types;

pub use config::PassportConfig;
pub use error::CoreError;
pub use types::{Did, SessionStatus};
