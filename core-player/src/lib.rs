//! # Preview Player Module
//!
//! The audio preview state machine behind the beat cards and the shared
//! transport bar.
//!
//! ## Overview
//!
//! An artist page renders one play control per beat but the page owns a
//! single audio stream: pressing play anywhere pauses whatever else was
//! playing. [`PreviewPlayer`] enforces that invariant and keeps every
//! control glyph, the transport bar, and the progress indicator consistent
//! with the one active stream.
//!
//! ## Concurrency model
//!
//! The player is single-threaded and event-driven. Each host event (a
//! click, a time-progress notification, end of stream) is handed to one
//! player method and runs to completion before the next event arrives.
//! The previous handle is always paused synchronously before a new one is
//! opened, so rapid successive play clicks cannot race two active streams.

pub mod player;
pub mod time;

pub use player::{Phase, PreviewPlayer};
pub use time::format_timestamp;
