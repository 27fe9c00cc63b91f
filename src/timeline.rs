//! Vertical scroll to horizontal track mapping.
//!
//! The container's vertical span (top at viewport top to bottom at viewport
//! bottom) is scrubbed linearly onto a translation of `0..=-max_offset`.
//! Parallax layers and reveal flags derive their own local progress from
//! that translation.

use crate::reveal::RevealFlag;
use crate::session::TrackProgress;

/// Measured layout of the timeline, all in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackGeometry {
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Scroll width of the track element.
    pub content_width: f64,
    /// Container top in page coordinates.
    pub container_top: f64,
    pub container_height: f64,
    /// Viewport x of the track's left edge when untranslated.
    pub track_left: f64,
}

impl TrackGeometry {
    /// Clamped at zero: a track narrower than the viewport stays put.
    pub fn max_offset(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    /// Vertical pixels consumed while the wrapper is pinned.
    pub fn scroll_range(&self) -> f64 {
        (self.container_height - self.viewport_height).max(0.0)
    }

    /// Container height needed for the mapping to have any range at all.
    pub fn min_container_height(&self) -> f64 {
        self.viewport_height + self.max_offset()
    }

    /// Progress through the container, negative before it and above one after.
    pub fn raw_progress(&self, scroll_y: f64) -> f64 {
        let range = self.scroll_range();
        let travelled = scroll_y - self.container_top;
        if range > 0.0 {
            travelled / range
        } else if travelled >= 0.0 {
            1.0
        } else {
            -1.0
        }
    }

    pub fn progress(&self, scroll_y: f64) -> f64 {
        self.raw_progress(scroll_y).clamp(0.0, 1.0)
    }

    pub fn translation(&self, progress: f64) -> f64 {
        translation(self.max_offset(), progress)
    }

    /// Viewport x of the track's left edge at translation `x`.
    pub fn screen_left(&self, x: f64) -> f64 {
        self.track_left + x
    }
}

/// Track translation for `progress`; non-increasing in `progress`.
pub fn translation(max_offset: f64, progress: f64) -> f64 {
    -max_offset * progress.clamp(0.0, 1.0)
}

/// Horizontal extent of an element inside the track.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Span {
    pub left: f64,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxLayer {
    pub speed: f64,
    /// Span of the layer's parent, which drives its progress.
    pub span: Span,
}

impl ParallaxLayer {
    pub fn new(speed: f64, span: Span) -> Self {
        Self { speed, span }
    }

    /// 0 when the parent's left edge is at the viewport's right edge, 1 when
    /// its right edge has left through the viewport's left edge.
    /// `screen_left` is the track's left edge in viewport coordinates.
    pub fn local_progress(&self, screen_left: f64, viewport_width: f64) -> f64 {
        let distance = viewport_width + self.span.width;
        if distance <= 0.0 {
            return 0.0;
        }
        ((viewport_width - self.span.left - screen_left) / distance).clamp(0.0, 1.0)
    }

    pub fn offset(&self, screen_left: f64, viewport_width: f64) -> f64 {
        parallax_offset(viewport_width, self.speed, self.local_progress(screen_left, viewport_width))
    }
}

pub fn parallax_offset(viewport_width: f64, speed: f64, local_progress: f64) -> f64 {
    viewport_width * speed * local_progress
}

/// Reads a `data-speed` value. Returns `None` for missing, unparsable or
/// non-finite input so the caller can pick a fallback.
pub fn parse_speed(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|s| s.is_finite())
}

/// What the DOM layer has to apply after a scroll update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimelineFrame {
    pub progress: f64,
    /// Target translation before scrub lag.
    pub translation: f64,
    pub parallax: Vec<f64>,
    pub revealed: Vec<usize>,
}

/// Scroll-driven state for the track, its parallax layers and its blocks.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    geometry: TrackGeometry,
    layers: Vec<ParallaxLayer>,
    blocks: Vec<RevealFlag>,
    reveal_edge: f64,
}

impl Timeline {
    pub fn new(reveal_edge: f64) -> Self {
        Self {
            reveal_edge,
            ..Self::default()
        }
    }

    pub fn geometry(&self) -> &TrackGeometry {
        &self.geometry
    }

    pub fn blocks(&self) -> &[RevealFlag] {
        &self.blocks
    }

    /// Replaces the measured layout. Block lefts are relative to the track
    /// and matched by index; flags that already fired stay fired.
    pub fn relayout(&mut self, geometry: TrackGeometry, layers: Vec<ParallaxLayer>, block_lefts: &[f64]) {
        self.geometry = geometry;
        self.layers = layers;

        let vw = geometry.viewport_width;
        let max_offset = geometry.max_offset();
        let edge = self.reveal_edge;
        let at_rest = |left: f64| geometry.screen_left(left);
        self.blocks.truncate(block_lefts.len());
        for (flag, &left) in self.blocks.iter_mut().zip(block_lefts) {
            flag.retarget(at_rest(left), vw, max_offset, edge);
        }
        let known = self.blocks.len();
        self.blocks.extend(
            block_lefts[known..]
                .iter()
                .map(|&left| RevealFlag::at_edge(at_rest(left), vw, max_offset, edge)),
        );
    }

    /// Recomputes everything for a new scroll position and records the
    /// track position in `track`.
    pub fn on_scroll(&mut self, track: &mut TrackProgress, scroll_y: f64) -> TimelineFrame {
        let raw = self.geometry.raw_progress(scroll_y);
        let progress = raw.clamp(0.0, 1.0);
        let max_offset = self.geometry.max_offset();
        let x = translation(max_offset, progress);

        track.max_offset = max_offset;
        track.offset = -x;

        let vw = self.geometry.viewport_width;
        let screen_left = self.geometry.screen_left(x);
        let parallax = self
            .layers
            .iter()
            .map(|layer| layer.offset(screen_left, vw))
            .collect();
        let revealed = self
            .blocks
            .iter_mut()
            .enumerate()
            .filter_map(|(i, flag)| flag.observe(raw).then_some(i))
            .collect();

        TimelineFrame {
            progress,
            translation: x,
            parallax,
            revealed,
        }
    }
}
