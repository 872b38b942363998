//! Control surfaces
//!
//! A control surface is the overlay UI drawn over the engine view. It is a
//! listener on both the engine event stream and the fullscreen stream, and is
//! bound to the view subtree the container inflates for it. The container holds
//! exactly one surface at a time and treats every implementation the same way.

mod default;

pub use default::{ControlsSnapshot, ControlsVisibility, DefaultControlSurface};

use crate::engine::PlayerListener;
use crate::fullscreen::FullscreenListener;
use crate::layout::ControlsView;

/// Overlay UI bound to a player container
///
/// The presentation toggles are optional: a custom surface that draws its own
/// UI can ignore them.
pub trait ControlSurface: PlayerListener + FullscreenListener {
    /// Bind the surface to its freshly inflated view subtree
    fn on_controls_view_inflated(&self, view: ControlsView);

    /// Current render state, if the surface exposes one
    fn snapshot(&self) -> Option<ControlsSnapshot> {
        None
    }

    fn show_ui(&self, _show: bool) {}

    fn show_play_pause_button(&self, _show: bool) {}

    fn show_video_title(&self, _show: bool) {}

    fn set_video_title(&self, _title: &str) {}

    fn show_fullscreen_button(&self, _show: bool) {}

    fn show_seek_bar(&self, _show: bool) {}

    fn show_current_time(&self, _show: bool) {}

    fn show_duration(&self, _show: bool) {}

    /// Live streams have no meaningful seek bar or duration
    fn enable_live_video_ui(&self, _enable: bool) {}
}
