//! Roomscribe Engine - the room geometry command engine
//!
//! Turns discrete, possibly ambiguous field commands into a consistent,
//! polygon-accurate spatial model with history and undo. The engine owns the
//! session state exclusively; the voice-tool dispatcher invokes one command
//! operation at a time and relays the returned string to the operator.
//!
//! The contract is purely command in, validated state plus human-readable
//! result string out - transport, transcription, rendering, and persistence
//! are external collaborators.

pub mod commands;
pub mod history;
pub mod queries;
pub mod session;

// Re-export commonly used types
pub use history::GeometryCommand;
pub use queries::{find_room, location_path};
pub use session::{ClaimData, Session, SessionSnapshot};
