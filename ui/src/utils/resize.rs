//! Container width tracking.
//!
//! egui has no resize callbacks to subscribe to. The widget measures its
//! container every frame and the watcher turns those measurements into
//! resize events, reporting only actual changes. The watcher is owned by the
//! widget state, so it goes away together with the widget.

/// Width changes smaller than this are layout jitter, not resizes.
const WIDTH_EPSILON: f32 = 0.5;

#[derive(Debug, Default, Clone, Copy)]
pub struct ResizeWatcher {
    last_width: Option<f32>,
}

impl ResizeWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a measurement and returns it if it differs from the last one.
    ///
    /// The very first measurement is always reported.
    pub fn observe(&mut self, width: f32) -> Option<f32> {
        if self
            .last_width
            .is_some_and(|last| (last - width).abs() < WIDTH_EPSILON)
        {
            return None;
        }
        log::debug!("Container width changed: {:?} -> {width}", self.last_width);
        self.last_width = Some(width);
        Some(width)
    }
}
