//! fizyo - Physiotherapy exercise catalog and set/rep tracker
//!
//! The catalog is built once at startup and handed to the CLI and TUI.
//! Each open exercise page owns one tracking session with its rest timer.

pub mod catalog;
pub mod exercises;
pub mod session;
pub mod tui;

pub use catalog::{Catalog, CatalogError, PageParams};
pub use exercises::ExerciseRecord;
pub use session::{Action, ExerciseSession, SessionState, Tracker};
