//! Workspace placeholder crate.
//!
//! This crate exists so host applications can depend on `beatstore-workspace`
//! and pick up the individual member crates without wiring each one by hand.
//! The actual functionality lives in the members:
//!
//! - `bridge-traits`: host capability contracts (page surface, audio
//!   element, payment widget, document fetch)
//! - `core-catalog`: catalog data model and accessor
//! - `core-player`: preview player state machine
//! - `core-page`: rendering, checkout, page wiring, configuration

pub use bridge_traits;
pub use core_catalog;
pub use core_page;
pub use core_player;
