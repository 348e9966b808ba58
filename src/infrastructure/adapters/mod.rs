//! Infrastructure adapters module
//!
//! This module contains adapters for the UI and scheduling collaborators.

pub mod memory_form;
pub mod timer;

// Re-export all adapters
pub use memory_form::{MemoryDocument, MemoryForm};
pub use timer::{ManualTimer, Timer, TimerTask, TokioTimer};
