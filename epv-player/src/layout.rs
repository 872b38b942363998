//! Display region contract and sizing policy
//!
//! The container does not interpret layout descriptors; it hands them to the
//! host's `DisplayRegion`, which inflates them into a view subtree.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Layout descriptor inflated for the default control surface
pub const DEFAULT_CONTROLS_LAYOUT: &str = "player_controls";

/// One axis of a layout request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Fill the parent along this axis
    MatchParent,
    /// Let the container decide (height becomes 16:9 of the width)
    Auto,
    Exact(u32),
}

/// Requested size of the container's view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutParams {
    pub width: Dimension,
    pub height: Dimension,
}

impl LayoutParams {
    /// Layout used while fullscreen
    pub fn fullscreen() -> Self {
        Self {
            width: Dimension::MatchParent,
            height: Dimension::MatchParent,
        }
    }

    /// Layout restored when leaving fullscreen
    pub fn embedded() -> Self {
        Self {
            width: Dimension::MatchParent,
            height: Dimension::Auto,
        }
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::embedded()
    }
}

/// Opaque reference to a controls layout
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutDescriptor(String);

impl LayoutDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn default_controls() -> Self {
        Self::new(DEFAULT_CONTROLS_LAYOUT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LayoutDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Handle to an inflated controls subtree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlsView {
    pub id: Uuid,
    pub layout: LayoutDescriptor,
}

impl ControlsView {
    pub fn new(layout: LayoutDescriptor) -> Self {
        Self {
            id: Uuid::new_v4(),
            layout,
        }
    }
}

/// The view whose layout the fullscreen coordinator restyles
pub trait HostView {
    fn layout_params(&self) -> LayoutParams;
    fn set_layout_params(&mut self, params: LayoutParams);
}

/// Region of the host UI the container draws into.
///
/// The engine's own view is the first child and is never removed; every other
/// child belongs to the control surface.
pub trait DisplayRegion: HostView + Send {
    /// Remove every child except the engine view
    fn clear_controls(&mut self);

    /// Inflate `layout` into the region and return the new subtree
    fn inflate(&mut self, layout: &LayoutDescriptor) -> ControlsView;
}

/// Height the container measures to.
///
/// With an `Auto` height the view is 16:9: `width * 9 / 16`, rounded down.
/// Otherwise the host-provided height is used unchanged.
pub fn measure_height(params: &LayoutParams, width: u32, host_height: u32) -> u32 {
    match params.height {
        Dimension::Auto => (u64::from(width) * 9 / 16) as u32,
        _ => host_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_height_is_sixteen_nine() {
        let params = LayoutParams::embedded();
        assert_eq!(measure_height(&params, 1920, 0), 1080);
        assert_eq!(measure_height(&params, 1280, 999), 720);
        // 100 * 9 / 16 = 56.25
        assert_eq!(measure_height(&params, 100, 0), 56);
    }

    #[test]
    fn test_explicit_height_passes_through() {
        let params = LayoutParams {
            width: Dimension::MatchParent,
            height: Dimension::Exact(300),
        };
        assert_eq!(measure_height(&params, 1920, 300), 300);
        assert_eq!(measure_height(&LayoutParams::fullscreen(), 1920, 1200), 1200);
    }

    #[test]
    fn test_large_width_does_not_overflow() {
        let params = LayoutParams::embedded();
        assert_eq!(measure_height(&params, u32::MAX, 0), (u32::MAX as u64 * 9 / 16) as u32);
    }
}
