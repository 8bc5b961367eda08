//! vox Accessibility Navigation
//!
//! The navigation core of the vox screen-reader simulator.
//!
//! Features:
//! - Cyclic element lists with boundary-wrap signaling
//! - Navigable-set scanner (tag classification, synthetic focusability)
//! - Quick-key registry and dispatch (lowercase advances, uppercase retreats)
//! - Arrow/Tab handlers sharing one position cursor

pub mod cyclic;
pub mod policy;
pub mod keys;
pub mod host;
pub mod navigator;
pub mod quick_keys;

pub use cyclic::{CyclicList, WrapMarker};
pub use policy::NavPolicy;
pub use keys::{Key, KeyEvent, KeyPhase};
pub use host::NavigationHost;
pub use navigator::{Navigator, NAVIGABLE_CLASS};
pub use quick_keys::{KeyBinding, KeyMap, KeyRegistry, QuickKeyManager};
