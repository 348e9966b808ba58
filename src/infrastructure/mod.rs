//! Infrastructure layer - External concerns and adapters
//!
//! This module contains the rendering contract the validator drives and the
//! adapters that implement it, together with timer adapters.

pub mod adapters;
pub mod view;

pub use adapters::{ManualTimer, MemoryDocument, MemoryForm, Timer, TimerTask, TokioTimer};
pub use view::{Document, FormView};
