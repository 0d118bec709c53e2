//! Audio bridge traits for preview playback.
//!
//! The storefront never decodes audio itself; it drives a host-owned media
//! element (an `<audio>` element in a browser, a stub in tests). These
//! abstractions keep the player state machine independent of that element
//! while preserving the control semantics it relies on.
//!
//! Starting playback is the only asynchronous operation: hosts confirm or
//! reject a start attempt via a completion callback (the media element's
//! play promise). Pausing and seeking take effect synchronously, which the
//! player depends on to keep at most one preview active: the previous handle
//! is paused before a new one is created, with no suspension point between.

use crate::error::Result;
use crate::platform::{PlatformSend, PlatformSendSync};
use std::time::Duration;

/// A live handle to one host media element playing (or paused on) a single
/// preview source.
///
/// A handle is bound to the source it was opened with. Reusing it for a
/// different source is not supported; open a new handle instead.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait AudioHandle: PlatformSend {
    /// Begin or resume playback.
    ///
    /// Resolves once the host has confirmed playback started. Returns
    /// [`BridgeError::PlaybackStart`](crate::BridgeError::PlaybackStart) if
    /// the source cannot be played (unsupported format, missing file,
    /// autoplay restriction).
    async fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the current position. Takes effect
    /// synchronously; a no-op if already paused.
    fn pause(&mut self);

    /// Move the playback position to an absolute offset.
    fn set_position(&mut self, position: Duration);

    /// Current playback position from the start of the source.
    fn position(&self) -> Duration;

    /// Total duration of the source, or `None` while the host has not yet
    /// determined it (metadata still loading).
    fn duration(&self) -> Option<Duration>;
}

/// Factory for [`AudioHandle`]s.
pub trait AudioBackend: PlatformSendSync {
    /// Create a fresh handle for the preview at `url`. Opening does not
    /// start playback; call [`AudioHandle::play`] on the result.
    fn open(&self, url: &str) -> Result<Box<dyn AudioHandle>>;
}
