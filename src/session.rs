//! Per-page context shared by the generator and the timeline.
//!
//! Each field has exactly one writer: the frame driver advances `render`
//! and the timeline writes `track`, while resize writes the sizes.

use glam::Vec2;

/// Layout viewport in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Inputs of the colour field for the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderState {
    /// Seconds since the generator started.
    pub elapsed: f64,
    /// Drawing surface size in device pixels.
    pub width: u32,
    pub height: u32,
}

impl RenderState {
    pub fn resolution(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Horizontal track position, `0..=max_offset` pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackProgress {
    pub offset: f64,
    pub max_offset: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub viewport: Viewport,
    pub pixel_ratio: f64,
    pub render: RenderState,
    pub track: TrackProgress,
}

impl Session {
    pub fn new(viewport: Viewport, pixel_ratio: f64) -> Self {
        let mut session = Self {
            viewport,
            pixel_ratio,
            render: RenderState::default(),
            track: TrackProgress::default(),
        };
        session.resize(viewport.width, viewport.height);
        session
    }

    /// Applies a new viewport size. Calling this twice with the same size is
    /// the same as calling it once.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
        self.render.width = surface_extent(width, self.pixel_ratio);
        self.render.height = surface_extent(height, self.pixel_ratio);
    }

    pub fn advance(&mut self, elapsed: f64) {
        self.render.elapsed = elapsed;
    }
}

fn surface_extent(css: f64, ratio: f64) -> u32 {
    // A zero-sized surface makes the aspect ratio NaN.
    (css * ratio).round().max(1.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ratio_maps_css_to_device_pixels_one_to_one() {
        let session = Session::new(Viewport::new(1920.0, 1080.0), 1.0);
        assert_eq!((session.render.width, session.render.height), (1920, 1080));
    }

    #[test]
    fn collapsed_viewport_keeps_a_drawable_surface() {
        let mut session = Session::new(Viewport::new(800.0, 600.0), 1.0);
        session.resize(0.0, 0.0);
        assert_eq!((session.render.width, session.render.height), (1, 1));
    }
}
