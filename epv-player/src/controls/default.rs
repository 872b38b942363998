//! Default control surface
//!
//! Tracks everything the stock overlay renders: play/pause, time labels,
//! buffering, title and the fullscreen icon. Rendering itself is the host's
//! job; it reads [`ControlsSnapshot`].

use super::ControlSurface;
use crate::engine::PlayerListener;
use crate::fullscreen::FullscreenListener;
use crate::layout::ControlsView;
use epv_common::{PlayerError, PlayerEvent, PlayerState};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;

/// Which widgets are shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlsVisibility {
    pub ui: bool,
    pub play_pause_button: bool,
    pub video_title: bool,
    pub fullscreen_button: bool,
    pub seek_bar: bool,
    pub current_time: bool,
    pub duration: bool,
}

impl Default for ControlsVisibility {
    fn default() -> Self {
        Self {
            ui: true,
            play_pause_button: true,
            video_title: true,
            fullscreen_button: true,
            seek_bar: true,
            current_time: true,
            duration: true,
        }
    }
}

/// Render state of the default overlay
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ControlsSnapshot {
    pub view: Option<ControlsView>,
    /// Engine reported ready; controls accept input
    pub ready: bool,
    pub playing: bool,
    pub buffering: bool,
    pub current_second: f32,
    pub duration: f32,
    pub loaded_fraction: f32,
    pub video_id: Option<String>,
    pub video_title: Option<String>,
    pub fullscreen: bool,
    pub live: bool,
    pub last_error: Option<PlayerError>,
    pub visibility: ControlsVisibility,
}

#[derive(Debug, Default)]
pub struct DefaultControlSurface {
    state: Mutex<ControlsSnapshot>,
}

impl DefaultControlSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerListener for DefaultControlSurface {
    fn on_event(&self, event: &PlayerEvent) {
        let mut state = self.state.lock();
        match event {
            PlayerEvent::Ready => state.ready = true,
            PlayerEvent::StateChange {
                state: player_state,
                position,
            } => {
                state.current_second = *position;
                state.buffering = matches!(player_state, PlayerState::Buffering);
                match player_state {
                    PlayerState::Playing => {
                        state.playing = true;
                        state.last_error = None;
                    }
                    PlayerState::Paused | PlayerState::Ended | PlayerState::VideoCued => {
                        state.playing = false
                    }
                    _ => {}
                }
            }
            PlayerEvent::Error { error } => {
                state.last_error = Some(*error);
                state.playing = false;
                state.buffering = false;
            }
            PlayerEvent::CurrentSecond { second } => state.current_second = *second,
            PlayerEvent::VideoDuration { duration } => state.duration = *duration,
            PlayerEvent::VideoLoadedFraction { fraction } => {
                state.loaded_fraction = fraction.clamp(0.0, 1.0)
            }
            PlayerEvent::VideoId { video_id } => state.video_id = Some(video_id.clone()),
            PlayerEvent::PlaybackQualityChange { .. }
            | PlayerEvent::PlaybackRateChange { .. }
            | PlayerEvent::ApiChange => {}
        }
    }
}

impl FullscreenListener for DefaultControlSurface {
    fn on_enter_fullscreen(&self) {
        self.state.lock().fullscreen = true;
    }

    fn on_exit_fullscreen(&self) {
        self.state.lock().fullscreen = false;
    }
}

impl ControlSurface for DefaultControlSurface {
    fn on_controls_view_inflated(&self, view: ControlsView) {
        debug!("Default controls bound to view {} ({})", view.id, view.layout);
        self.state.lock().view = Some(view);
    }

    fn snapshot(&self) -> Option<ControlsSnapshot> {
        Some(self.state.lock().clone())
    }

    fn show_ui(&self, show: bool) {
        self.state.lock().visibility.ui = show;
    }

    fn show_play_pause_button(&self, show: bool) {
        self.state.lock().visibility.play_pause_button = show;
    }

    fn show_video_title(&self, show: bool) {
        self.state.lock().visibility.video_title = show;
    }

    fn set_video_title(&self, title: &str) {
        self.state.lock().video_title = Some(title.to_string());
    }

    fn show_fullscreen_button(&self, show: bool) {
        self.state.lock().visibility.fullscreen_button = show;
    }

    fn show_seek_bar(&self, show: bool) {
        self.state.lock().visibility.seek_bar = show;
    }

    fn show_current_time(&self, show: bool) {
        self.state.lock().visibility.current_time = show;
    }

    fn show_duration(&self, show: bool) {
        self.state.lock().visibility.duration = show;
    }

    fn enable_live_video_ui(&self, enable: bool) {
        let mut state = self.state.lock();
        state.live = enable;
        state.visibility.seek_bar = !enable;
        state.visibility.duration = !enable;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutDescriptor;

    fn snapshot(surface: &DefaultControlSurface) -> ControlsSnapshot {
        surface.snapshot().unwrap()
    }

    #[test]
    fn test_play_pause_tracking() {
        let surface = DefaultControlSurface::new();
        surface.on_event(&PlayerEvent::Ready);
        surface.on_event(&PlayerEvent::StateChange {
            state: PlayerState::Playing,
            position: 0.0,
        });
        assert!(snapshot(&surface).playing);

        surface.on_event(&PlayerEvent::StateChange {
            state: PlayerState::Buffering,
            position: 4.0,
        });
        let state = snapshot(&surface);
        assert!(state.playing);
        assert!(state.buffering);

        surface.on_event(&PlayerEvent::StateChange {
            state: PlayerState::Ended,
            position: 90.0,
        });
        let state = snapshot(&surface);
        assert!(!state.playing);
        assert!(!state.buffering);
        assert_eq!(state.current_second, 90.0);
    }

    #[test]
    fn test_error_stops_playback_display() {
        let surface = DefaultControlSurface::new();
        surface.on_event(&PlayerEvent::StateChange {
            state: PlayerState::Playing,
            position: 1.0,
        });
        surface.on_event(&PlayerEvent::Error {
            error: PlayerError::VideoNotFound,
        });

        let state = snapshot(&surface);
        assert!(!state.playing);
        assert_eq!(state.last_error, Some(PlayerError::VideoNotFound));
    }

    #[test]
    fn test_live_ui_hides_seek_bar_and_duration() {
        let surface = DefaultControlSurface::new();
        surface.enable_live_video_ui(true);
        let state = snapshot(&surface);
        assert!(state.live);
        assert!(!state.visibility.seek_bar);
        assert!(!state.visibility.duration);
        assert!(state.visibility.current_time);
    }

    #[test]
    fn test_view_binding_and_fullscreen_icon() {
        let surface = DefaultControlSurface::new();
        let view = ControlsView::new(LayoutDescriptor::default_controls());
        surface.on_controls_view_inflated(view.clone());
        surface.on_enter_fullscreen();

        let state = snapshot(&surface);
        assert_eq!(state.view, Some(view));
        assert!(state.fullscreen);

        surface.on_exit_fullscreen();
        assert!(!snapshot(&surface).fullscreen);
    }
}
