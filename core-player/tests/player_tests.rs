//! Preview player state machine tests.
//!
//! Exercises the at-most-one-active invariant, glyph bookkeeping, start
//! failures, progress formatting, and seeking against scripted fakes of the
//! audio backend and the page surface.

use async_trait::async_trait;
use bridge_traits::error::Result as BridgeResult;
use bridge_traits::{
    AudioBackend, AudioHandle, BridgeError, ControlId, Glyph, PageSurface, Region,
};
use core_player::{Phase, PreviewPlayer};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============================================================================
// Scripted audio backend
// ============================================================================

#[derive(Debug, Default)]
struct HandleState {
    url: String,
    playing: bool,
    position: Duration,
    duration: Option<Duration>,
    play_calls: usize,
    pause_calls: usize,
    fail_play: bool,
}

#[derive(Clone)]
struct SharedHandle(Arc<Mutex<HandleState>>);

struct ScriptedHandle(Arc<Mutex<HandleState>>);

#[async_trait]
impl AudioHandle for ScriptedHandle {
    async fn play(&mut self) -> BridgeResult<()> {
        let mut state = self.0.lock().unwrap();
        state.play_calls += 1;
        if state.fail_play {
            return Err(BridgeError::PlaybackStart("unsupported source".into()));
        }
        state.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        let mut state = self.0.lock().unwrap();
        state.pause_calls += 1;
        state.playing = false;
    }

    fn set_position(&mut self, position: Duration) {
        self.0.lock().unwrap().position = position;
    }

    fn position(&self) -> Duration {
        self.0.lock().unwrap().position
    }

    fn duration(&self) -> Option<Duration> {
        self.0.lock().unwrap().duration
    }
}

#[derive(Default)]
struct ScriptedBackend {
    handles: Mutex<Vec<SharedHandle>>,
    duration: Mutex<Option<Duration>>,
    fail_next_play: Mutex<bool>,
    fail_open: Mutex<bool>,
}

impl ScriptedBackend {
    fn with_duration(duration: Duration) -> Self {
        let backend = Self::default();
        *backend.duration.lock().unwrap() = Some(duration);
        backend
    }

    fn opened(&self) -> Vec<SharedHandle> {
        self.handles.lock().unwrap().clone()
    }

    fn open_count(&self) -> usize {
        self.handles.lock().unwrap().len()
    }
}

impl AudioBackend for ScriptedBackend {
    fn open(&self, url: &str) -> BridgeResult<Box<dyn AudioHandle>> {
        if *self.fail_open.lock().unwrap() {
            return Err(BridgeError::NotAvailable("no media element".into()));
        }
        let state = Arc::new(Mutex::new(HandleState {
            url: url.to_string(),
            duration: *self.duration.lock().unwrap(),
            fail_play: *self.fail_next_play.lock().unwrap(),
            ..HandleState::default()
        }));
        self.handles.lock().unwrap().push(SharedHandle(state.clone()));
        Ok(Box::new(ScriptedHandle(state)))
    }
}

// ============================================================================
// Recording surface
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum SurfaceEvent {
    RegionHtml(Region, String),
    ControlGlyph(String, Glyph),
    TransportTrack(String),
    TransportGlyph(Glyph),
    Progress(f64, String, String),
}

#[derive(Default)]
struct RecordingSurface {
    events: Mutex<Vec<SurfaceEvent>>,
}

impl RecordingSurface {
    fn events(&self) -> Vec<SurfaceEvent> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: SurfaceEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl PageSurface for RecordingSurface {
    fn set_region_html(&self, region: Region, html: &str) {
        self.push(SurfaceEvent::RegionHtml(region, html.to_string()));
    }

    fn set_control_glyph(&self, control: &ControlId, glyph: Glyph) {
        self.push(SurfaceEvent::ControlGlyph(control.0.clone(), glyph));
    }

    fn set_transport_track(&self, title: &str) {
        self.push(SurfaceEvent::TransportTrack(title.to_string()));
    }

    fn set_transport_glyph(&self, glyph: Glyph) {
        self.push(SurfaceEvent::TransportGlyph(glyph));
    }

    fn set_progress(&self, percent: f64, elapsed: &str, total: &str) {
        self.push(SurfaceEvent::Progress(
            percent,
            elapsed.to_string(),
            total.to_string(),
        ));
    }

    fn set_modal_item(&self, _title: &str, _price_label: &str) {}
    fn show_modal(&self) {}
    fn hide_modal(&self) {}
    fn show_download(&self, _href: &str, _label: &str) {}
    fn hide_download(&self) {}
}

fn player_with(
    backend: Arc<ScriptedBackend>,
    surface: Arc<RecordingSurface>,
) -> PreviewPlayer {
    PreviewPlayer::new(backend, surface)
}

fn control(id: &str) -> ControlId {
    ControlId::new(id)
}

// ============================================================================
// Tests: toggle_preview
// ============================================================================

#[tokio::test]
async fn first_play_starts_and_paints_playing_state() {
    let backend = Arc::new(ScriptedBackend::default());
    let surface = Arc::new(RecordingSurface::default());
    let mut player = player_with(backend.clone(), surface.clone());

    player
        .toggle_preview(control("beat-01"), "audio/a.mp3", "Midnight Haze")
        .await;

    assert_eq!(backend.open_count(), 1);
    assert_eq!(player.active().unwrap().1, Phase::Playing);

    let events = surface.events();
    assert!(events.contains(&SurfaceEvent::ControlGlyph(
        "beat-01".to_string(),
        Glyph::Pause
    )));
    assert!(events.contains(&SurfaceEvent::TransportTrack("Midnight Haze".to_string())));
    assert!(events.contains(&SurfaceEvent::TransportGlyph(Glyph::Pause)));
}

#[tokio::test]
async fn same_control_while_playing_pauses_without_new_handle() {
    let backend = Arc::new(ScriptedBackend::default());
    let surface = Arc::new(RecordingSurface::default());
    let mut player = player_with(backend.clone(), surface.clone());

    player
        .toggle_preview(control("beat-01"), "audio/a.mp3", "Midnight Haze")
        .await;
    player
        .toggle_preview(control("beat-01"), "audio/a.mp3", "Midnight Haze")
        .await;

    assert_eq!(backend.open_count(), 1, "pause must not create a handle");
    assert_eq!(player.active().unwrap().1, Phase::Paused);

    let handle = &backend.opened()[0];
    let state = handle.0.lock().unwrap();
    assert!(!state.playing);
    assert_eq!(state.pause_calls, 1);
}

#[tokio::test]
async fn switching_controls_pauses_previous_before_starting_next() {
    let backend = Arc::new(ScriptedBackend::default());
    let surface = Arc::new(RecordingSurface::default());
    let mut player = player_with(backend.clone(), surface.clone());

    player
        .toggle_preview(control("beat-01"), "audio/a.mp3", "Midnight Haze")
        .await;
    player
        .toggle_preview(control("beat-02"), "audio/b.mp3", "Glass Alley")
        .await;

    let handles = backend.opened();
    assert_eq!(handles.len(), 2);
    assert!(!handles[0].0.lock().unwrap().playing);
    assert!(handles[1].0.lock().unwrap().playing);
    assert_eq!(handles[1].0.lock().unwrap().url, "audio/b.mp3");

    // Previous control's glyph is reset before the new control is painted
    // as playing.
    let events = surface.events();
    let reset = events
        .iter()
        .position(|e| *e == SurfaceEvent::ControlGlyph("beat-01".to_string(), Glyph::Play))
        .expect("previous glyph reset");
    let painted = events
        .iter()
        .position(|e| *e == SurfaceEvent::ControlGlyph("beat-02".to_string(), Glyph::Pause))
        .expect("new glyph painted");
    assert!(reset < painted);
}

#[tokio::test]
async fn at_most_one_handle_is_active_across_many_controls() {
    let backend = Arc::new(ScriptedBackend::default());
    let surface = Arc::new(RecordingSurface::default());
    let mut player = player_with(backend.clone(), surface.clone());

    for i in 0..5 {
        let id = format!("beat-{i:02}");
        let url = format!("audio/{i}.mp3");
        player.toggle_preview(control(&id), &url, "Track").await;

        let playing = backend
            .opened()
            .iter()
            .filter(|h| h.0.lock().unwrap().playing)
            .count();
        assert!(playing <= 1, "more than one active handle after click {i}");
    }
}

#[tokio::test]
async fn same_control_while_paused_restarts_with_fresh_handle() {
    let backend = Arc::new(ScriptedBackend::default());
    let surface = Arc::new(RecordingSurface::default());
    let mut player = player_with(backend.clone(), surface.clone());

    player
        .toggle_preview(control("beat-01"), "audio/a.mp3", "Midnight Haze")
        .await;
    player
        .toggle_preview(control("beat-01"), "audio/a.mp3", "Midnight Haze")
        .await; // pause
    player
        .toggle_preview(control("beat-01"), "audio/a.mp3", "Midnight Haze")
        .await; // restart

    assert_eq!(backend.open_count(), 2);
    assert_eq!(player.active().unwrap().1, Phase::Playing);
}

#[tokio::test]
async fn start_failure_reports_unavailable_and_returns_to_idle() {
    let backend = Arc::new(ScriptedBackend::default());
    *backend.fail_next_play.lock().unwrap() = true;
    let surface = Arc::new(RecordingSurface::default());
    let mut player = player_with(backend.clone(), surface.clone());

    player
        .toggle_preview(control("beat-01"), "audio/broken.mp3", "Midnight Haze")
        .await;

    assert!(player.active().is_none());
    let events = surface.events();
    assert!(events.contains(&SurfaceEvent::TransportTrack(
        "Midnight Haze (preview unavailable)".to_string()
    )));
    assert!(events.contains(&SurfaceEvent::TransportGlyph(Glyph::Play)));
    assert!(!events.contains(&SurfaceEvent::ControlGlyph(
        "beat-01".to_string(),
        Glyph::Pause
    )));
}

#[tokio::test]
async fn open_failure_reports_unavailable() {
    let backend = Arc::new(ScriptedBackend::default());
    *backend.fail_open.lock().unwrap() = true;
    let surface = Arc::new(RecordingSurface::default());
    let mut player = player_with(backend.clone(), surface.clone());

    player
        .toggle_preview(control("beat-01"), "audio/a.mp3", "Midnight Haze")
        .await;

    assert!(player.active().is_none());
    assert!(surface.events().contains(&SurfaceEvent::TransportTrack(
        "Midnight Haze (preview unavailable)".to_string()
    )));
}

// ============================================================================
// Tests: transport toggle and end of stream
// ============================================================================

#[tokio::test]
async fn transport_toggle_mirrors_glyphs_onto_origin_control() {
    let backend = Arc::new(ScriptedBackend::default());
    let surface = Arc::new(RecordingSurface::default());
    let mut player = player_with(backend.clone(), surface.clone());

    player
        .toggle_preview(control("beat-01"), "audio/a.mp3", "Midnight Haze")
        .await;
    player.toggle_transport().await;

    assert_eq!(player.active().unwrap().1, Phase::Paused);
    let events = surface.events();
    assert!(events.contains(&SurfaceEvent::ControlGlyph(
        "beat-01".to_string(),
        Glyph::Play
    )));

    player.toggle_transport().await;
    assert_eq!(player.active().unwrap().1, Phase::Playing);
    assert_eq!(backend.open_count(), 1, "toggle must reuse the handle");
}

#[tokio::test]
async fn transport_toggle_without_active_preview_is_a_noop() {
    let backend = Arc::new(ScriptedBackend::default());
    let surface = Arc::new(RecordingSurface::default());
    let mut player = player_with(backend.clone(), surface.clone());

    player.toggle_transport().await;

    assert!(surface.events().is_empty());
    assert_eq!(backend.open_count(), 0);
}

#[tokio::test]
async fn natural_end_reverts_glyphs_and_keeps_handle() {
    let backend = Arc::new(ScriptedBackend::default());
    let surface = Arc::new(RecordingSurface::default());
    let mut player = player_with(backend.clone(), surface.clone());

    player
        .toggle_preview(control("beat-01"), "audio/a.mp3", "Midnight Haze")
        .await;
    player.note_ended();

    assert_eq!(player.active().unwrap().1, Phase::Paused);
    assert_eq!(backend.open_count(), 1);
    let events = surface.events();
    assert!(events.contains(&SurfaceEvent::ControlGlyph(
        "beat-01".to_string(),
        Glyph::Play
    )));
    assert!(events.contains(&SurfaceEvent::TransportGlyph(Glyph::Play)));
}

// ============================================================================
// Tests: progress and seeking
// ============================================================================

#[tokio::test]
async fn tick_formats_progress() {
    let backend = Arc::new(ScriptedBackend::with_duration(Duration::from_secs(200)));
    let surface = Arc::new(RecordingSurface::default());
    let mut player = player_with(backend.clone(), surface.clone());

    player
        .toggle_preview(control("beat-01"), "audio/a.mp3", "Midnight Haze")
        .await;
    backend.opened()[0].0.lock().unwrap().position = Duration::from_secs(65);
    player.tick();

    let last = surface.events().pop().unwrap();
    match last {
        SurfaceEvent::Progress(percent, elapsed, total) => {
            assert!((percent - 32.5).abs() < 1e-9);
            assert_eq!(elapsed, "1:05");
            assert_eq!(total, "3:20");
        }
        other => panic!("expected progress event, got {other:?}"),
    }
}

#[tokio::test]
async fn tick_with_unknown_duration_renders_zero_timestamps() {
    let backend = Arc::new(ScriptedBackend::default());
    let surface = Arc::new(RecordingSurface::default());
    let mut player = player_with(backend.clone(), surface.clone());

    player
        .toggle_preview(control("beat-01"), "audio/a.mp3", "Midnight Haze")
        .await;
    backend.opened()[0].0.lock().unwrap().position = Duration::from_secs(3);
    player.tick();

    let last = surface.events().pop().unwrap();
    assert_eq!(
        last,
        SurfaceEvent::Progress(0.0, "0:00".to_string(), "0:00".to_string())
    );
}

#[tokio::test]
async fn seek_at_half_of_200_seconds_lands_at_100() {
    let backend = Arc::new(ScriptedBackend::with_duration(Duration::from_secs(200)));
    let surface = Arc::new(RecordingSurface::default());
    let mut player = player_with(backend.clone(), surface.clone());

    player
        .toggle_preview(control("beat-01"), "audio/a.mp3", "Midnight Haze")
        .await;
    player.seek_to_fraction(300.0, 600.0);

    let state = backend.opened()[0].0.lock().unwrap().position;
    assert_eq!(state, Duration::from_secs(100));
}

#[tokio::test]
async fn seek_clamps_out_of_range_pointer_positions() {
    let backend = Arc::new(ScriptedBackend::with_duration(Duration::from_secs(200)));
    let surface = Arc::new(RecordingSurface::default());
    let mut player = player_with(backend.clone(), surface.clone());

    player
        .toggle_preview(control("beat-01"), "audio/a.mp3", "Midnight Haze")
        .await;

    player.seek_to_fraction(-50.0, 600.0);
    assert_eq!(
        backend.opened()[0].0.lock().unwrap().position,
        Duration::ZERO
    );

    player.seek_to_fraction(900.0, 600.0);
    assert_eq!(
        backend.opened()[0].0.lock().unwrap().position,
        Duration::from_secs(200)
    );
}

#[tokio::test]
async fn seek_without_active_preview_is_a_noop() {
    let backend = Arc::new(ScriptedBackend::with_duration(Duration::from_secs(200)));
    let surface = Arc::new(RecordingSurface::default());
    let mut player = player_with(backend, surface.clone());

    player.seek_to_fraction(300.0, 600.0);
    assert!(surface.events().is_empty());
}
