//! vox Simulator
//!
//! The owning session for the vox screen-reader simulator: wires a
//! document to the navigation core, supplies the move-focus operation,
//! the navigation-allowed predicate, and free-text classification.

mod config;
mod session;
pub mod text;

pub use config::{ConfigError, SimConfig};
pub use session::{FocusContext, Session};
