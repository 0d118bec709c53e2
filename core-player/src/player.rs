//! The preview player state machine.

use crate::time::format_timestamp;
use bridge_traits::{AudioBackend, AudioHandle, ControlId, Glyph, PageSurface};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Suffix appended to the transport title when a preview cannot start.
const UNAVAILABLE_SUFFIX: &str = " (preview unavailable)";

/// Playback phase of the active preview.
///
/// The transient loading window (handle created, start requested, not yet
/// confirmed) is not a named phase: each play request is awaited to
/// completion inside the operation that issued it, so no other event can
/// observe the machine mid-start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Paused,
}

struct ActivePreview {
    control: ControlId,
    title: String,
    handle: Box<dyn AudioHandle>,
    phase: Phase,
}

/// Owns the page's single active preview stream and keeps every play
/// control, the transport bar, and the progress indicator consistent
/// with it.
///
/// The machine holds at most one [`AudioHandle`]. Whenever a new preview is
/// requested the previous handle is paused and its control glyph reset
/// *before* the new handle is opened; combined with the page's
/// run-to-completion event model this makes two simultaneously active
/// streams impossible.
pub struct PreviewPlayer {
    backend: Arc<dyn AudioBackend>,
    surface: Arc<dyn PageSurface>,
    active: Option<ActivePreview>,
}

impl PreviewPlayer {
    pub fn new(backend: Arc<dyn AudioBackend>, surface: Arc<dyn PageSurface>) -> Self {
        Self {
            backend,
            surface,
            active: None,
        }
    }

    /// Handle a click on a per-beat play control.
    ///
    /// - Clicking the control of the currently *playing* preview pauses it;
    ///   no new handle is created.
    /// - Any other click (different control, or the active control while
    ///   paused) pauses and abandons the previous handle, then opens and
    ///   starts a fresh one for `url`.
    ///
    /// A preview that cannot start is reported on the transport bar as
    /// unavailable and leaves the machine idle; it is never an error to the
    /// caller and no retry is attempted.
    pub async fn toggle_preview(&mut self, control: ControlId, url: &str, title: &str) {
        if let Some(active) = &mut self.active {
            if active.control == control && active.phase == Phase::Playing {
                active.handle.pause();
                active.phase = Phase::Paused;
                self.surface.set_control_glyph(&control, Glyph::Play);
                self.surface.set_transport_track(title);
                self.surface.set_transport_glyph(Glyph::Play);
                return;
            }
        }

        // At-most-one-active: retire the previous handle before opening the
        // next one, with no await point in between.
        if let Some(mut previous) = self.active.take() {
            previous.handle.pause();
            self.surface.set_control_glyph(&previous.control, Glyph::Play);
        }

        let mut handle = match self.backend.open(url) {
            Ok(handle) => handle,
            Err(err) => {
                warn!(%control, url, error = %err, "preview could not be opened");
                self.report_unavailable(title);
                return;
            }
        };

        match handle.play().await {
            Ok(()) => {
                self.surface.set_control_glyph(&control, Glyph::Pause);
                self.surface.set_transport_track(title);
                self.surface.set_transport_glyph(Glyph::Pause);
                self.active = Some(ActivePreview {
                    control,
                    title: title.to_string(),
                    handle,
                    phase: Phase::Playing,
                });
            }
            Err(err) => {
                warn!(%control, url, error = %err, "preview could not start");
                self.report_unavailable(title);
            }
        }
    }

    /// Handle the transport bar's play/pause toggle.
    ///
    /// Mirrors the glyph change onto the originating per-beat control. A
    /// no-op when no preview is active.
    pub async fn toggle_transport(&mut self) {
        let Some(active) = &mut self.active else {
            debug!("transport toggle ignored: no active preview");
            return;
        };

        match active.phase {
            Phase::Playing => {
                active.handle.pause();
                active.phase = Phase::Paused;
                self.surface.set_transport_glyph(Glyph::Play);
                self.surface.set_control_glyph(&active.control, Glyph::Play);
            }
            Phase::Paused => match active.handle.play().await {
                Ok(()) => {
                    active.phase = Phase::Playing;
                    self.surface.set_transport_glyph(Glyph::Pause);
                    self.surface.set_control_glyph(&active.control, Glyph::Pause);
                }
                Err(err) => {
                    warn!(error = %err, "preview could not resume");
                    let abandoned = self.active.take();
                    if let Some(abandoned) = abandoned {
                        self.surface
                            .set_control_glyph(&abandoned.control, Glyph::Play);
                        self.report_unavailable(&abandoned.title);
                    }
                }
            },
        }
    }

    /// Handle natural end-of-stream from the host.
    ///
    /// The control reverts to the play glyph and the transport shows the
    /// paused state. The handle is retained so the transport toggle can
    /// restart the same source, but it is never reused for a different
    /// source without being recreated.
    pub fn note_ended(&mut self) {
        let Some(active) = &mut self.active else {
            return;
        };
        active.phase = Phase::Paused;
        self.surface.set_control_glyph(&active.control, Glyph::Play);
        self.surface.set_transport_track(&active.title);
        self.surface.set_transport_glyph(Glyph::Play);
    }

    /// Handle a periodic time-progress notification.
    ///
    /// Recomputes the elapsed/total timestamps and the fill percentage for
    /// the progress indicator. While the host has not yet determined the
    /// duration, both timestamps render as `0:00` and the fill is 0%.
    pub fn tick(&self) {
        let Some(active) = &self.active else {
            return;
        };
        let duration = active.handle.duration();
        let position = active.handle.position();

        let (percent, elapsed, total) = match duration {
            Some(total_duration) if !total_duration.is_zero() => {
                let percent =
                    (position.as_secs_f64() / total_duration.as_secs_f64()) * 100.0;
                (
                    percent,
                    format_timestamp(Some(position)),
                    format_timestamp(Some(total_duration)),
                )
            }
            _ => (0.0, format_timestamp(None), format_timestamp(None)),
        };
        self.surface.set_progress(percent, &elapsed, &total);
    }

    /// Handle a pointer press on the progress track.
    ///
    /// `offset` is the pointer position within the track's bounding box and
    /// `width` the box width, in the same units. The playback position is
    /// set to `offset / width` (clamped to `[0, 1]`) of the total duration.
    /// A no-op without an active handle, a known duration, or a positive
    /// width.
    pub fn seek_to_fraction(&mut self, offset: f64, width: f64) {
        let Some(active) = &mut self.active else {
            debug!("seek ignored: no active preview");
            return;
        };
        if width <= 0.0 {
            return;
        }
        let Some(duration) = active.handle.duration() else {
            debug!("seek ignored: duration unknown");
            return;
        };
        let fraction = (offset / width).clamp(0.0, 1.0);
        let target = Duration::from_secs_f64(fraction * duration.as_secs_f64());
        active.handle.set_position(target);
    }

    /// Control and phase of the active preview, if any.
    pub fn active(&self) -> Option<(&ControlId, Phase)> {
        self.active
            .as_ref()
            .map(|active| (&active.control, active.phase))
    }

    fn report_unavailable(&self, title: &str) {
        self.surface
            .set_transport_track(&format!("{title}{UNAVAILABLE_SUFFIX}"));
        self.surface.set_transport_glyph(Glyph::Play);
    }
}
