//! Logging facility for roomscribe.
//!
//! Re-exports the initialization entry point; engine and collaborators emit
//! events through the `tracing` macros directly.

pub mod init;

pub use init::{init, Profile};
