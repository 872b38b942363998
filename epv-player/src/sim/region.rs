//! In-memory display region

use crate::layout::{ControlsView, DisplayRegion, HostView, LayoutDescriptor, LayoutParams};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct RegionInner {
    params: LayoutParams,
    /// Controls children; the engine view is implicit
    controls: Vec<ControlsView>,
    inflations: usize,
}

#[derive(Debug, Clone, Default)]
pub struct SimulatedRegion {
    inner: Arc<Mutex<RegionInner>>,
}

impl SimulatedRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controls views currently attached
    pub fn controls(&self) -> Vec<ControlsView> {
        self.inner.lock().controls.clone()
    }

    pub fn inflations(&self) -> usize {
        self.inner.lock().inflations
    }
}

impl HostView for SimulatedRegion {
    fn layout_params(&self) -> LayoutParams {
        self.inner.lock().params
    }

    fn set_layout_params(&mut self, params: LayoutParams) {
        self.inner.lock().params = params;
    }
}

impl DisplayRegion for SimulatedRegion {
    fn clear_controls(&mut self) {
        self.inner.lock().controls.clear();
    }

    fn inflate(&mut self, layout: &LayoutDescriptor) -> ControlsView {
        let view = ControlsView::new(layout.clone());
        let mut inner = self.inner.lock();
        inner.controls.push(view.clone());
        inner.inflations += 1;
        view
    }
}
